pub mod dashboard;
pub mod discount_chart;

pub use dashboard::ProductionDashboard;
