//! Permission codes checked by the report pages.
//!
//! The identity service answers `GET /api/usuarios/{id}/permissoes` with a JSON array
//! of these codes.

pub const FINANCIAL_INDICATORS: &str = "indicadores_financeiros";
pub const FUEL_DETAILS: &str = "abastecimento_combustivel";
pub const FIELD_COST: &str = "custo_producao_talhao";
pub const PRODUCER_GRAIN_STOCK: &str = "estoque_graos_produtor";
pub const PRODUCTION_DISCOUNTS: &str = "producao_descontos";

/// Raw service response.
pub type PermissionCodes = Vec<String>;
