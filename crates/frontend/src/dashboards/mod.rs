pub mod d400_financial_views;
pub mod d401_fuel_details;
pub mod d402_field_cost;
pub mod d403_grain_stock;
pub mod d404_production_discounts;

pub use d400_financial_views::ui::FinancialViewsDashboard;
pub use d401_fuel_details::ui::FuelDetailsDashboard;
pub use d402_field_cost::ui::FieldCostDashboard;
pub use d403_grain_stock::ui::GrainStockDashboard;
pub use d404_production_discounts::ui::ProductionDashboard;
