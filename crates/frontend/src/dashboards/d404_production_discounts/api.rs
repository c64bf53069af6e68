use contracts::dashboards::d404_production_discounts::{DiscountQuery, ProductionDiscount};

use crate::shared::api_utils::get_json;

pub async fn fetch_discounts(query: DiscountQuery) -> Result<Vec<ProductionDiscount>, String> {
    get_json("/api/producao/descontos", &query.to_query_pairs()).await
}
