use contracts::domain::a001_asset::aggregate::Asset;

use crate::shared::api_utils::get_json;

pub async fn fetch_assets() -> Result<Vec<Asset>, String> {
    get_json("/api/patrimonios", &[]).await
}
