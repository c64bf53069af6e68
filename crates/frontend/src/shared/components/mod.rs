pub mod date_input;
pub mod error_banner;
pub mod loader;
pub mod page_header;
pub mod paged_bar_chart;
pub mod ui;
