use serde::{Deserialize, Serialize};

use crate::shared::filter::{DateRange, FilterError, ValidateFilter};
use crate::shared::options::NamedEntity;

/// Label of the zeroed record shown when no producer matches the selection.
pub const NO_PRODUCER_LABEL: &str = "NENHUM";

/// Grain received for a producer, in kilograms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockInflows {
    pub peso: f64,
    pub desconto_classificacao: f64,
    pub taxa_recepcao: f64,
    pub cota_capital: f64,
    pub taxa_armazenamento: f64,
    pub quebra_tecnica: f64,
    pub peso_liquido: f64,
}

/// Grain shipped out for a producer, in kilograms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockOutflows {
    pub peso: f64,
    pub desconto_classificacao: f64,
    pub peso_liquido: f64,
}

/// Grain ledger of one producer: opening/closing balance plus movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerGrainStock {
    pub id_produtor: i64,
    pub produtor: String,
    #[serde(default)]
    pub saldo_anterior: f64,
    #[serde(default)]
    pub saldo_final: f64,
    #[serde(default)]
    pub entradas: StockInflows,
    #[serde(default)]
    pub saidas: StockOutflows,
}

impl ProducerGrainStock {
    /// Zeroed record used when the selected producer is not in the collection.
    pub fn none() -> Self {
        Self {
            id_produtor: 0,
            produtor: NO_PRODUCER_LABEL.to_string(),
            saldo_anterior: 0.0,
            saldo_final: 0.0,
            entradas: StockInflows::default(),
            saidas: StockOutflows::default(),
        }
    }
}

impl NamedEntity for ProducerGrainStock {
    fn option_value(&self) -> String {
        self.id_produtor.to_string()
    }

    fn option_label(&self) -> String {
        self.produtor.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrainStockQuery {
    pub date_range: DateRange,
}

impl GrainStockQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", self.date_range.start_param()),
            ("endDate", self.date_range.end_param()),
        ]
    }
}

impl ValidateFilter for GrainStockQuery {
    fn validate(&self) -> Result<(), FilterError> {
        self.date_range.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_zeroed() {
        let none = ProducerGrainStock::none();
        assert_eq!(none.produtor, "NENHUM");
        assert_eq!(none.saldo_final, 0.0);
        assert_eq!(none.entradas.peso_liquido, 0.0);
        assert_eq!(none.saidas.peso, 0.0);
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let json = r#"{"idProdutor": 8, "produtor": "Fazenda Boa Vista", "saldoFinal": 1200.5, "entradas": {"peso": 3000}}"#;
        let stock: ProducerGrainStock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.saldo_anterior, 0.0);
        assert_eq!(stock.entradas.peso, 3000.0);
        assert_eq!(stock.entradas.quebra_tecnica, 0.0);
        assert_eq!(stock.saidas, StockOutflows::default());
    }
}
