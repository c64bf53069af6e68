use contracts::domain::a003_asset_type::aggregate::AssetType;

use crate::shared::api_utils::get_json;

pub async fn fetch_asset_types() -> Result<Vec<AssetType>, String> {
    get_json("/api/tipos-patrimonio", &[]).await
}
