use contracts::domain::a004_crop_season::aggregate::CropSeason;

use crate::shared::api_utils::get_json;

pub async fn fetch_crop_seasons() -> Result<Vec<CropSeason>, String> {
    get_json("/api/safras", &[]).await
}
