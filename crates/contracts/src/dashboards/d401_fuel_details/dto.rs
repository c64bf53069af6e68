use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::filter::{CostBasis, DateRange, EntitySelection, FilterError, ValidateFilter};

/// One fuel requisition line of the analytic fuel summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelDetailLine {
    /// ISO date or datetime as sent by the service
    pub data: String,
    pub numero_requisicao: String,
    pub patrimonio: String,
    pub combustivel: String,
    pub local_saida: String,
    /// Liters
    pub quantidade: f64,
    pub custo_individual: f64,
    pub total: f64,
}

impl FuelDetailLine {
    pub fn date(&self) -> Option<NaiveDate> {
        let date_part = self.data.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

/// Filters of the fuel summary page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelDetailsQuery {
    pub cost_basis: CostBasis,
    pub date_range: DateRange,
    pub asset: EntitySelection,
    pub warehouse: EntitySelection,
    pub asset_type: EntitySelection,
}

impl FuelDetailsQuery {
    /// Query string pairs; `"_"` selections are left out.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("custo", self.cost_basis.code().to_string()),
            ("startDate", self.date_range.start_param()),
            ("endDate", self.date_range.end_param()),
        ];
        if let Some(id) = self.asset.as_filter() {
            pairs.push(("idPatrimonio", id.to_string()));
        }
        if let Some(id) = self.warehouse.as_filter() {
            pairs.push(("idAlmoxarifado", id.to_string()));
        }
        if let Some(id) = self.asset_type.as_filter() {
            pairs.push(("idTipoPatrimonio", id.to_string()));
        }
        pairs
    }
}

impl ValidateFilter for FuelDetailsQuery {
    fn validate(&self) -> Result<(), FilterError> {
        self.date_range.validate()
    }
}

/// Lines of one fuel type with their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelGroup {
    pub combustivel: String,
    pub lines: Vec<FuelDetailLine>,
    pub total_liters: f64,
    pub total_cost: f64,
}

/// Groups lines by fuel type, groups ordered by name; lines keep service order.
pub fn group_by_fuel(lines: &[FuelDetailLine]) -> Vec<FuelGroup> {
    let mut groups: Vec<FuelGroup> = Vec::new();
    for line in lines {
        match groups.iter_mut().find(|g| g.combustivel == line.combustivel) {
            Some(group) => {
                group.total_liters += line.quantidade;
                group.total_cost += line.total;
                group.lines.push(line.clone());
            }
            None => groups.push(FuelGroup {
                combustivel: line.combustivel.clone(),
                lines: vec![line.clone()],
                total_liters: line.quantidade,
                total_cost: line.total,
            }),
        }
    }
    groups.sort_by(|a, b| a.combustivel.cmp(&b.combustivel));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(day: u32, fuel: &str, liters: f64, unit_cost: f64) -> FuelDetailLine {
        FuelDetailLine {
            data: format!("2024-01-{:02}T00:00:00", day),
            numero_requisicao: format!("REQ-{}", day),
            patrimonio: "Trator 01".to_string(),
            combustivel: fuel.to_string(),
            local_saida: "Tanque Sede".to_string(),
            quantidade: liters,
            custo_individual: unit_cost,
            total: liters * unit_cost,
        }
    }

    #[test]
    fn test_ten_lines_of_two_fuels_make_two_groups() {
        let lines: Vec<FuelDetailLine> = (1..=10)
            .map(|day| {
                let fuel = if day % 2 == 0 { "GASOLINA" } else { "DIESEL S10" };
                line(day, fuel, 100.0, 6.0)
            })
            .collect();

        let groups = group_by_fuel(&lines);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].combustivel, "DIESEL S10");
        assert_eq!(groups[1].combustivel, "GASOLINA");
        assert_eq!(groups[0].lines.len(), 5);
        assert_eq!(groups[0].total_liters, 500.0);
        assert_eq!(groups[0].total_cost, 3000.0);
        assert_eq!(groups[1].total_cost, 3000.0);
        assert_eq!(groups[0].lines[0].numero_requisicao, "REQ-1");
    }

    #[test]
    fn test_all_selections_are_omitted() {
        let query = FuelDetailsQuery {
            date_range: DateRange::from_params("01-01-2024", "31-01-2024"),
            ..Default::default()
        };
        let keys: Vec<&str> = query.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["custo", "startDate", "endDate"]);

        let explicit = FuelDetailsQuery {
            asset: EntitySelection::new("12"),
            cost_basis: CostBasis::Current,
            ..query.clone()
        };
        let pairs = explicit.to_query_pairs();
        assert!(pairs.contains(&("idPatrimonio", "12".to_string())));
        assert!(pairs.contains(&("custo", "atual".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "idAlmoxarifado"));
    }

    #[test]
    fn test_line_date_parsing() {
        let l = line(5, "DIESEL", 1.0, 1.0);
        assert_eq!(l.date(), NaiveDate::from_ymd_opt(2024, 1, 5));
        let broken = FuelDetailLine { data: "ontem".into(), ..l };
        assert_eq!(broken.date(), None);
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "data": "2024-01-03",
            "numeroRequisicao": "881",
            "patrimonio": "Caminhão 2",
            "combustivel": "DIESEL S10",
            "localSaida": "Posto Interno",
            "quantidade": 120.5,
            "custoIndividual": 5.89,
            "total": 709.745
        }"#;
        let l: FuelDetailLine = serde_json::from_str(json).unwrap();
        assert_eq!(l.local_saida, "Posto Interno");
        assert_eq!(l.quantidade, 120.5);
    }
}
