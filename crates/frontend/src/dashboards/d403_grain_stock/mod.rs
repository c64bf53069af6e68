pub mod api;
pub mod export;
pub mod snapshot;
pub mod ui;
