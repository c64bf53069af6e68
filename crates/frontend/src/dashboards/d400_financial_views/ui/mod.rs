pub mod dashboard;

pub use dashboard::FinancialViewsDashboard;
