use contracts::dashboards::d402_field_cost::{FieldCost, FieldCostQuery};

use crate::shared::api_utils::get_json;

pub async fn fetch_field_cost(query: FieldCostQuery) -> Result<FieldCost, String> {
    get_json("/api/custo-producao/talhao", &query.to_query_pairs()).await
}
