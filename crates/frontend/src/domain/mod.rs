pub mod a001_asset;
pub mod a002_warehouse;
pub mod a003_asset_type;
pub mod a004_crop_season;
