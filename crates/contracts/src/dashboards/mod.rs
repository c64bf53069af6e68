pub mod d400_financial_views;
pub mod d401_fuel_details;
pub mod d402_field_cost;
pub mod d403_grain_stock;
pub mod d404_production_discounts;
