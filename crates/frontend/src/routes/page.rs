//! Report pages reachable from the sidebar.

use contracts::system::permissions::{
    FIELD_COST, FINANCIAL_INDICATORS, FUEL_DETAILS, PRODUCER_GRAIN_STOCK, PRODUCTION_DISCOUNTS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageKey {
    #[default]
    FinancialIndicators,
    FuelDetails,
    FieldCost,
    GrainStock,
    Production,
}

impl PageKey {
    pub const ALL: [PageKey; 5] = [
        PageKey::FinancialIndicators,
        PageKey::FuelDetails,
        PageKey::FieldCost,
        PageKey::GrainStock,
        PageKey::Production,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            PageKey::FinancialIndicators => "/indicadores-financeiros",
            PageKey::FuelDetails => "/abastecimentos/combustivel",
            PageKey::FieldCost => "/custo-producao",
            PageKey::GrainStock => "/estoque-graos",
            PageKey::Production => "/producao",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::FinancialIndicators => "Indicadores Financeiros",
            PageKey::FuelDetails => "Resumo por Combustível",
            PageKey::FieldCost => "Custo de Produção",
            PageKey::GrainStock => "Estoque de Grãos",
            PageKey::Production => "Produção",
        }
    }

    pub fn permission(&self) -> &'static str {
        match self {
            PageKey::FinancialIndicators => FINANCIAL_INDICATORS,
            PageKey::FuelDetails => FUEL_DETAILS,
            PageKey::FieldCost => FIELD_COST,
            PageKey::GrainStock => PRODUCER_GRAIN_STOCK,
            PageKey::Production => PRODUCTION_DISCOUNTS,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageKey::FinancialIndicators => "dollar-sign",
            PageKey::FuelDetails => "fuel",
            PageKey::FieldCost => "layers",
            PageKey::GrainStock => "package",
            PageKey::Production => "bar-chart",
        }
    }

    /// Sidebar section the page is listed under.
    pub fn section(&self) -> &'static str {
        match self {
            PageKey::FinancialIndicators => "Financeiro",
            PageKey::FuelDetails => "Abastecimento",
            PageKey::FieldCost | PageKey::Production => "Produção",
            PageKey::GrainStock => "Armazenagem",
        }
    }

    /// Exact match, ignoring a trailing slash. `/` maps to the default page.
    pub fn from_path(path: &str) -> Option<PageKey> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(PageKey::default());
        }
        PageKey::ALL.into_iter().find(|key| key.path() == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_path() {
        assert_eq!(PageKey::from_path("/custo-producao"), Some(PageKey::FieldCost));
        assert_eq!(
            PageKey::from_path("/abastecimentos/combustivel/"),
            Some(PageKey::FuelDetails)
        );
        assert_eq!(PageKey::from_path("/"), Some(PageKey::FinancialIndicators));
        assert_eq!(PageKey::from_path(""), Some(PageKey::FinancialIndicators));
        assert_eq!(PageKey::from_path("/abastecimentos"), None);
    }

    #[test]
    fn test_paths_and_permissions_are_distinct() {
        let paths: HashSet<_> = PageKey::ALL.iter().map(|k| k.path()).collect();
        let codes: HashSet<_> = PageKey::ALL.iter().map(|k| k.permission()).collect();
        assert_eq!(paths.len(), PageKey::ALL.len());
        assert_eq!(codes.len(), PageKey::ALL.len());
        for key in PageKey::ALL {
            assert_eq!(PageKey::from_path(key.path()), Some(key));
        }
    }
}
