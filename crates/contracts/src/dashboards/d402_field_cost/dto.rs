use serde::{Deserialize, Serialize};

use crate::shared::filter::{DateRange, EntitySelection, FilterError, ValidateFilter};

/// Cost of one talhão (field) and crop variety within a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCostLine {
    pub talhao_variedade: String,
    pub safra: String,
    pub total: f64,
    pub total_por_hectare: f64,
    pub porcentagem: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCost {
    pub total_custo: f64,
    pub total_custo_por_hectare: f64,
    pub total_custo_talhao: Vec<FieldCostLine>,
}

/// Metric plotted by the field cost chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostUnit {
    #[serde(rename = "cost")]
    Cost,
    #[default]
    #[serde(rename = "hectareCost")]
    HectareCost,
    #[serde(rename = "percent")]
    Percent,
}

impl CostUnit {
    pub fn code(&self) -> &'static str {
        match self {
            CostUnit::Cost => "cost",
            CostUnit::HectareCost => "hectareCost",
            CostUnit::Percent => "percent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostUnit::Cost => "Custo Total",
            CostUnit::HectareCost => "Custo por Hectare",
            CostUnit::Percent => "Percentual",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "cost" => CostUnit::Cost,
            "percent" => CostUnit::Percent,
            _ => CostUnit::HectareCost,
        }
    }

    pub fn all() -> [CostUnit; 3] {
        [CostUnit::Cost, CostUnit::HectareCost, CostUnit::Percent]
    }

    /// Caption preceding the headline total.
    pub fn total_caption(&self) -> &'static str {
        match self {
            CostUnit::HectareCost => "Custo Total/ha: ",
            _ => "Custo Total: ",
        }
    }
}

impl FieldCost {
    /// Headline total for the selected unit; percent shows the absolute cost.
    pub fn headline_total(&self, unit: CostUnit) -> f64 {
        match unit {
            CostUnit::HectareCost => self.total_custo_por_hectare,
            CostUnit::Cost | CostUnit::Percent => self.total_custo,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.total_custo_talhao
            .iter()
            .map(|line| line.talhao_variedade.clone())
            .collect()
    }

    pub fn seasons(&self) -> Vec<String> {
        self.total_custo_talhao
            .iter()
            .map(|line| line.safra.clone())
            .collect()
    }

    pub fn values(&self, unit: CostUnit) -> Vec<f64> {
        self.total_custo_talhao
            .iter()
            .map(|line| match unit {
                CostUnit::Cost => line.total,
                CostUnit::HectareCost => line.total_por_hectare,
                CostUnit::Percent => line.porcentagem,
            })
            .collect()
    }
}

/// Filters of the per-field cost card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCostQuery {
    /// Seasons selected on the host page
    pub season_ids: Vec<String>,
    /// Season picked inside the card; `"_"` means every selected season
    pub selected_season: EntitySelection,
    pub date_range: DateRange,
}

impl FieldCostQuery {
    /// Nothing to ask the service for until at least one season is selected.
    pub fn has_seasons(&self) -> bool {
        !self.season_ids.is_empty()
    }

    pub fn safra_param(&self) -> String {
        match self.selected_season.as_filter() {
            Some(id) => id.to_string(),
            None => self.season_ids.join(","),
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("safraId", self.safra_param()),
            ("startDate", self.date_range.start_param()),
            ("endDate", self.date_range.end_param()),
        ]
    }
}

impl ValidateFilter for FieldCostQuery {
    fn validate(&self) -> Result<(), FilterError> {
        self.date_range.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldCost {
        FieldCost {
            total_custo: 1000.0,
            total_custo_por_hectare: 250.0,
            total_custo_talhao: vec![
                FieldCostLine {
                    talhao_variedade: "T1 - M6410".into(),
                    safra: "Soja 23/24".into(),
                    total: 600.0,
                    total_por_hectare: 150.0,
                    porcentagem: 60.0,
                },
                FieldCostLine {
                    talhao_variedade: "T2 - BRS 1003".into(),
                    safra: "Soja 23/24".into(),
                    total: 400.0,
                    total_por_hectare: 100.0,
                    porcentagem: 40.0,
                },
            ],
        }
    }

    #[test]
    fn test_values_follow_unit() {
        let cost = sample();
        assert_eq!(cost.values(CostUnit::Cost), vec![600.0, 400.0]);
        assert_eq!(cost.values(CostUnit::HectareCost), vec![150.0, 100.0]);
        assert_eq!(cost.values(CostUnit::Percent), vec![60.0, 40.0]);
        assert_eq!(cost.headline_total(CostUnit::HectareCost), 250.0);
        assert_eq!(cost.headline_total(CostUnit::Percent), 1000.0);
    }

    #[test]
    fn test_all_seasons_are_joined() {
        let query = FieldCostQuery {
            season_ids: vec!["4".into(), "5".into()],
            ..Default::default()
        };
        assert_eq!(query.safra_param(), "4,5");

        let single = FieldCostQuery {
            selected_season: EntitySelection::new("5"),
            ..query
        };
        assert_eq!(single.safra_param(), "5");
    }

    #[test]
    fn test_no_seasons_means_nothing_to_fetch() {
        assert!(!FieldCostQuery::default().has_seasons());
    }

    #[test]
    fn test_unit_codes() {
        assert_eq!(CostUnit::from_code("hectareCost"), CostUnit::HectareCost);
        assert_eq!(CostUnit::from_code("percent").total_caption(), "Custo Total: ");
        assert_eq!(CostUnit::HectareCost.total_caption(), "Custo Total/ha: ");
    }
}
