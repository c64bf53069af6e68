pub mod dashboard;
pub mod producer_details;

pub use dashboard::GrainStockDashboard;
