/// Spreadsheet export of the dataset currently on screen.
///
/// The file is an Excel-compatible CSV: UTF-8 BOM, `;` separator, one header row and
/// cells already rendered in their column format (dates `dd/mm/yyyy`, currency `R$`).
/// Rendered cells are text: a spreadsheet reads them as dates and numbers only under a
/// pt-BR locale.
use chrono::NaiveDate;
use contracts::shared::filter::DateRange;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::date_utils::format_display_date;
use super::number_format::{format_currency, format_decimal};

const CSV_MIME: &str = "text/csv;charset=utf-8;";
const CSV_EXTENSION: &str = ".csv";

pub const EMPTY_EXPORT_MESSAGE: &str = "Nenhum dado para exportar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    /// `dd/mm/yyyy`
    Date,
    /// `R$ 1.234,56`
    Currency,
    Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Date(Option<NaiveDate>),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    pub header: &'static str,
    pub format: CellFormat,
}

impl ExportColumn {
    pub const fn new(header: &'static str, format: CellFormat) -> Self {
        Self { header, format }
    }
}

/// Records that can be written as spreadsheet rows.
pub trait ExcelExportable {
    fn columns() -> Vec<ExportColumn>;

    /// One value per column, in column order.
    fn to_cells(&self) -> Vec<CellValue>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spreadsheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Spreadsheet {
    pub fn to_csv(&self) -> String {
        let mut csv = String::from('\u{FEFF}');
        csv.push_str(&join_row(&self.headers));
        csv.push('\n');
        for row in &self.rows {
            csv.push_str(&join_row(row));
            csv.push('\n');
        }
        csv
    }
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_cell(cell))
        .collect::<Vec<_>>()
        .join(";")
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

pub fn format_cell(value: &CellValue, format: CellFormat) -> String {
    match (value, format) {
        (CellValue::Date(Some(date)), _) => format_display_date(*date),
        (CellValue::Date(None), _) => String::new(),
        (CellValue::Number(n), CellFormat::Currency) => format_currency(*n),
        (CellValue::Number(n), _) => format_decimal(*n, 3),
        (CellValue::Text(text), _) => text.clone(),
    }
}

/// Renders `data`; an empty dataset is an error the page shows to the user.
pub fn build_spreadsheet<T: ExcelExportable>(data: &[T]) -> Result<Spreadsheet, String> {
    if data.is_empty() {
        return Err(EMPTY_EXPORT_MESSAGE.to_string());
    }

    let columns = T::columns();
    let headers = columns.iter().map(|c| c.header.to_string()).collect();
    let rows = data
        .iter()
        .map(|item| {
            item.to_cells()
                .iter()
                .zip(columns.iter())
                .map(|(value, column)| format_cell(value, column.format))
                .collect()
        })
        .collect();

    Ok(Spreadsheet { headers, rows })
}

/// `"<TITLE>[ - <entity>] <start> À <end>.csv"`, unset dates shown as `-`.
pub fn export_filename(title: &str, entity: Option<&str>, range: &DateRange) -> String {
    match entity {
        Some(entity) => format!("{} - {} {}{}", title, entity, range.label(), CSV_EXTENSION),
        None => format!("{} {}{}", title, range.label(), CSV_EXTENSION),
    }
}

/// Builds the spreadsheet and triggers the browser download.
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let sheet = build_spreadsheet(data)?;
    let blob = create_csv_blob(&sheet.to_csv())?;
    download_blob(&blob, filename)?;
    log::info!("Exported {} rows to {}", sheet.rows.len(), filename);
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(CSV_MIME);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let result = download_url(&url, filename);
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    result
}

/// Clicks a hidden anchor pointing at `url` (object or data URL).
pub(crate) fn download_url(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        day: Option<NaiveDate>,
        amount: f64,
    }

    impl ExcelExportable for Row {
        fn columns() -> Vec<ExportColumn> {
            vec![
                ExportColumn::new("NOME", CellFormat::Text),
                ExportColumn::new("DATA", CellFormat::Date),
                ExportColumn::new("VALOR", CellFormat::Currency),
            ]
        }

        fn to_cells(&self) -> Vec<CellValue> {
            vec![
                CellValue::Text(self.name.to_string()),
                CellValue::Date(self.day),
                CellValue::Number(self.amount),
            ]
        }
    }

    #[test]
    fn test_empty_dataset_is_reported() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(build_spreadsheet(&rows).unwrap_err(), EMPTY_EXPORT_MESSAGE);
    }

    #[test]
    fn test_csv_layout() {
        let rows = vec![
            Row { name: "Trator; 01", day: NaiveDate::from_ymd_opt(2024, 1, 2), amount: 1500.5 },
            Row { name: "Caminhão", day: None, amount: 10.0 },
        ];
        let csv = build_spreadsheet(&rows).unwrap().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].trim_start_matches('\u{FEFF}'), "NOME;DATA;VALOR");
        assert_eq!(lines[1], "\"Trator; 01\";02/01/2024;R$ 1.500,50");
        assert_eq!(lines[2], "Caminhão;;R$ 10,00");
    }

    #[test]
    fn test_filename_encodes_filter() {
        let range = DateRange::from_params("01-01-2024", "31-01-2024");
        assert_eq!(
            export_filename("RESUMO POR COMBUSTIVEL", None, &range),
            "RESUMO POR COMBUSTIVEL 01-01-2024 À 31-01-2024.csv"
        );
        assert_eq!(
            export_filename("RESUMO POR COMBUSTIVEL", Some("Trator 01"), &DateRange::default()),
            "RESUMO POR COMBUSTIVEL - Trator 01 - À -.csv"
        );
    }
}
