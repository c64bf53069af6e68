use contracts::dashboards::d400_financial_views::FinancialView;

use crate::shared::api_utils::get_json;

/// Financial indicator views configured in the ERP.
pub async fn fetch_financial_views() -> Result<Vec<FinancialView>, String> {
    get_json("/api/indicadores-financeiros/views", &[]).await
}
