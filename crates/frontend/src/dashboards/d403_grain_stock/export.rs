use contracts::dashboards::d403_grain_stock::{GrainStockQuery, ProducerGrainStock};

use crate::shared::export::{export_filename, CellFormat, CellValue, ExcelExportable, ExportColumn};

pub const EXPORT_TITLE: &str = "ESTOQUE DE GRAOS POR PRODUTOR";

impl ExcelExportable for ProducerGrainStock {
    fn columns() -> Vec<ExportColumn> {
        vec![
            ExportColumn::new("PRODUTOR", CellFormat::Text),
            ExportColumn::new("SALDO ANTERIOR", CellFormat::Decimal),
            ExportColumn::new("ENTRADA PESO", CellFormat::Decimal),
            ExportColumn::new("ENTRADA DESC. CLASSIFICACAO", CellFormat::Decimal),
            ExportColumn::new("TAXA RECEPCAO", CellFormat::Decimal),
            ExportColumn::new("COTA CAPITAL", CellFormat::Decimal),
            ExportColumn::new("TAXA ARMAZENAMENTO", CellFormat::Decimal),
            ExportColumn::new("QUEBRA TECNICA", CellFormat::Decimal),
            ExportColumn::new("ENTRADA PESO LIQUIDO", CellFormat::Decimal),
            ExportColumn::new("SAIDA PESO", CellFormat::Decimal),
            ExportColumn::new("SAIDA DESC. CLASSIFICACAO", CellFormat::Decimal),
            ExportColumn::new("SAIDA PESO LIQUIDO", CellFormat::Decimal),
            ExportColumn::new("SALDO FINAL", CellFormat::Decimal),
        ]
    }

    fn to_cells(&self) -> Vec<CellValue> {
        let e = &self.entradas;
        let s = &self.saidas;
        vec![
            CellValue::Text(self.produtor.clone()),
            CellValue::Number(self.saldo_anterior),
            CellValue::Number(e.peso),
            CellValue::Number(e.desconto_classificacao),
            CellValue::Number(e.taxa_recepcao),
            CellValue::Number(e.cota_capital),
            CellValue::Number(e.taxa_armazenamento),
            CellValue::Number(e.quebra_tecnica),
            CellValue::Number(e.peso_liquido),
            CellValue::Number(s.peso),
            CellValue::Number(s.desconto_classificacao),
            CellValue::Number(s.peso_liquido),
            CellValue::Number(self.saldo_final),
        ]
    }
}

pub fn grain_stock_export_filename(query: &GrainStockQuery) -> String {
    export_filename(EXPORT_TITLE, None, &query.date_range)
}
