//! Fuel summary filters as URL parameters, so a filtered view can be shared.

use contracts::dashboards::d401_fuel_details::FuelDetailsQuery;
use contracts::shared::filter::{CostBasis, DateRange, EntitySelection};
use serde::{Deserialize, Serialize};

use crate::shared::query_params::EntryParams;

/// `?idUsuario&dbNome&custo&startDate&endDate&idPatrimonio&idAlmoxarifado&idTipoPatrimonio`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelDetailsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custo: Option<String>,
    /// `dd-MM-yyyy` or `"_"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_patrimonio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_almoxarifado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_tipo_patrimonio: Option<String>,
}

impl FuelDetailsParams {
    /// Query for these parameters; missing values select everything.
    pub fn to_query(&self) -> FuelDetailsQuery {
        let selection = |value: &Option<String>| EntitySelection::new(value.clone().unwrap_or_default());
        FuelDetailsQuery {
            cost_basis: CostBasis::from_code(self.custo.as_deref().unwrap_or_default()),
            date_range: DateRange::from_params(
                self.start_date.as_deref().unwrap_or_default(),
                self.end_date.as_deref().unwrap_or_default(),
            ),
            asset: selection(&self.id_patrimonio),
            warehouse: selection(&self.id_almoxarifado),
            asset_type: selection(&self.id_tipo_patrimonio),
        }
    }

    /// Every filter is written, `"_"` standing for unset, next to the entry parameters.
    pub fn from_query(query: &FuelDetailsQuery, entry: &EntryParams) -> Self {
        Self {
            id_usuario: entry.id_usuario.clone(),
            db_nome: entry.db_nome.clone(),
            custo: Some(query.cost_basis.code().to_string()),
            start_date: Some(query.date_range.start_url_value()),
            end_date: Some(query.date_range.end_url_value()),
            id_patrimonio: Some(query.asset.as_str().to_string()),
            id_almoxarifado: Some(query.warehouse.as_str().to_string()),
            id_tipo_patrimonio: Some(query.asset_type.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_params::{parse_query, to_query_string};
    use chrono::NaiveDate;

    #[test]
    fn test_url_parameters_become_filters() {
        let params: FuelDetailsParams = parse_query(
            "?idUsuario=42&custo=atual&startDate=01-01-2024&endDate=_&idPatrimonio=7&idAlmoxarifado=_",
        );
        let query = params.to_query();

        assert_eq!(query.cost_basis, CostBasis::Current);
        assert_eq!(query.date_range.start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(query.date_range.end, None);
        assert_eq!(query.asset.as_filter(), Some("7"));
        assert!(query.warehouse.is_all());
        assert!(query.asset_type.is_all());
    }

    #[test]
    fn test_empty_url_gives_default_filters() {
        let params: FuelDetailsParams = parse_query("");
        assert_eq!(params.to_query(), FuelDetailsQuery::default());
    }

    #[test]
    fn test_written_url_keeps_entry_parameters() {
        let entry = EntryParams {
            id_usuario: Some("42".to_string()),
            db_nome: Some("fazenda".to_string()),
        };
        let query = FuelDetailsQuery {
            date_range: DateRange::from_params("01-01-2024", "31-01-2024"),
            asset: EntitySelection::new("7"),
            ..Default::default()
        };

        let written = to_query_string(&FuelDetailsParams::from_query(&query, &entry)).unwrap();

        assert_eq!(
            written,
            "idUsuario=42&dbNome=fazenda&custo=medio&startDate=01-01-2024&endDate=31-01-2024\
             &idPatrimonio=7&idAlmoxarifado=_&idTipoPatrimonio=_"
        );
        let reparsed: FuelDetailsParams = parse_query(&written);
        assert_eq!(reparsed.to_query(), query);
    }
}
