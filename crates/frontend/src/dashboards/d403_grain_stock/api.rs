use contracts::dashboards::d403_grain_stock::{GrainStockQuery, ProducerGrainStock};

use crate::shared::api_utils::get_json;

/// Grain ledger of every producer in the period.
pub async fn fetch_producer_stock(query: GrainStockQuery) -> Result<Vec<ProducerGrainStock>, String> {
    get_json("/api/estoque-graos/produtores", &query.to_query_pairs()).await
}
