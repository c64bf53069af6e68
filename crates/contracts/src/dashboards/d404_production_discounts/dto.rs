use serde::{Deserialize, Serialize};

use crate::shared::filter::{DateRange, FilterError, ValidateFilter};

/// Classification discount applied to received grain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionDiscount {
    pub descricao: String,
    /// Kilograms discounted
    pub peso: f64,
    /// Share of the received weight, 0..100
    pub percentual: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountUnit {
    #[default]
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "percent")]
    Percent,
}

impl DiscountUnit {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountUnit::Kg => "kg",
            DiscountUnit::Percent => "percent",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "percent" => DiscountUnit::Percent,
            _ => DiscountUnit::Kg,
        }
    }
}

pub fn discount_labels(discounts: &[ProductionDiscount]) -> Vec<String> {
    discounts.iter().map(|d| d.descricao.clone()).collect()
}

pub fn discount_values(discounts: &[ProductionDiscount], unit: DiscountUnit) -> Vec<f64> {
    discounts
        .iter()
        .map(|d| match unit {
            DiscountUnit::Kg => d.peso,
            DiscountUnit::Percent => d.percentual,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountQuery {
    pub date_range: DateRange,
}

impl DiscountQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", self.date_range.start_param()),
            ("endDate", self.date_range.end_param()),
        ]
    }
}

impl ValidateFilter for DiscountQuery {
    fn validate(&self) -> Result<(), FilterError> {
        self.date_range.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_by_unit() {
        let discounts = vec![
            ProductionDiscount { descricao: "Umidade".into(), peso: 420.0, percentual: 1.4 },
            ProductionDiscount { descricao: "Impureza".into(), peso: 90.0, percentual: 0.3 },
        ];
        assert_eq!(discount_values(&discounts, DiscountUnit::Kg), vec![420.0, 90.0]);
        assert_eq!(discount_values(&discounts, DiscountUnit::Percent), vec![1.4, 0.3]);
        assert_eq!(discount_labels(&discounts), vec!["Umidade", "Impureza"]);
    }
}
