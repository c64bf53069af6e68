pub mod dashboard;
pub mod talhao_cost;

pub use dashboard::FieldCostDashboard;
