use contracts::domain::a002_warehouse::aggregate::Warehouse;

use crate::shared::api_utils::get_json;

pub async fn fetch_warehouses() -> Result<Vec<Warehouse>, String> {
    get_json("/api/almoxarifados", &[]).await
}
