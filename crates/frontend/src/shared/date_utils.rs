/// Utilities for date formatting
///
/// Report services send ISO dates; the UI shows `dd/MM/yyyy` and `<input type="date">`
/// works with `yyyy-MM-dd`.
use chrono::NaiveDate;

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, INPUT_DATE_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => date_str.to_string(),
    }
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Value for `<input type="date">`; empty when unset.
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Cleared or malformed inputs mean "no date".
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}
