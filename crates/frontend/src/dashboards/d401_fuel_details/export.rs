use contracts::dashboards::d401_fuel_details::{FuelDetailLine, FuelDetailsQuery};

use crate::shared::export::{export_filename, CellFormat, CellValue, ExcelExportable, ExportColumn};

pub const EXPORT_TITLE: &str = "RESUMO POR COMBUSTIVEL";

impl ExcelExportable for FuelDetailLine {
    fn columns() -> Vec<ExportColumn> {
        vec![
            ExportColumn::new("DATA", CellFormat::Date),
            ExportColumn::new("NUMERO REQUISICAO", CellFormat::Text),
            ExportColumn::new("PATRIMONIO", CellFormat::Text),
            ExportColumn::new("COMBUSTIVEL", CellFormat::Text),
            ExportColumn::new("LOCAL DE SAIDA", CellFormat::Text),
            ExportColumn::new("LITROS", CellFormat::Decimal),
            ExportColumn::new("CUSTO POR LITRO", CellFormat::Currency),
            ExportColumn::new("TOTAL", CellFormat::Currency),
        ]
    }

    fn to_cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Date(self.date()),
            CellValue::Text(self.numero_requisicao.clone()),
            CellValue::Text(self.patrimonio.clone()),
            CellValue::Text(self.combustivel.clone()),
            CellValue::Text(self.local_saida.clone()),
            CellValue::Number(self.quantidade),
            CellValue::Number(self.custo_individual),
            CellValue::Number(self.total),
        ]
    }
}

/// File name for the current filters; `asset_label` is the selected asset, if any.
pub fn fuel_export_filename(query: &FuelDetailsQuery, asset_label: Option<&str>) -> String {
    let entity = if query.asset.is_all() { None } else { asset_label };
    export_filename(EXPORT_TITLE, entity, &query.date_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_spreadsheet;
    use contracts::shared::filter::{DateRange, EntitySelection};

    fn lines() -> Vec<FuelDetailLine> {
        (1..=10)
            .map(|day| FuelDetailLine {
                data: format!("2024-01-{:02}T08:30:00", day),
                numero_requisicao: format!("{}", 1000 + day),
                patrimonio: "TRATOR JD 6110J".to_string(),
                combustivel: if day % 2 == 0 { "GASOLINA" } else { "DIESEL S10" }.to_string(),
                local_saida: "TANQUE SEDE".to_string(),
                quantidade: 120.5,
                custo_individual: 5.89,
                total: 709.75,
            })
            .collect()
    }

    #[test]
    fn test_export_has_header_and_one_row_per_line() {
        let sheet = build_spreadsheet(&lines()).unwrap();

        assert_eq!(sheet.headers.len(), 8);
        assert_eq!(sheet.headers[0], "DATA");
        assert_eq!(sheet.headers[7], "TOTAL");
        assert_eq!(sheet.rows.len(), 10);

        let first = &sheet.rows[0];
        assert_eq!(first[0], "01/01/2024");
        assert_eq!(first[3], "DIESEL S10");
        assert_eq!(first[5], "120,5");
        assert_eq!(first[6], "R$ 5,89");
        assert_eq!(first[7], "R$ 709,75");
        assert_eq!(sheet.to_csv().lines().count(), 11);
    }

    #[test]
    fn test_filename_uses_asset_only_when_selected() {
        let mut query = FuelDetailsQuery {
            date_range: DateRange::from_params("01-01-2024", "31-01-2024"),
            ..Default::default()
        };
        assert_eq!(
            fuel_export_filename(&query, Some("Todos")),
            "RESUMO POR COMBUSTIVEL 01-01-2024 À 31-01-2024.csv"
        );

        query.asset = EntitySelection::new("12");
        assert_eq!(
            fuel_export_filename(&query, Some("TRATOR JD 6110J")),
            "RESUMO POR COMBUSTIVEL - TRATOR JD 6110J 01-01-2024 À 31-01-2024.csv"
        );
    }
}
