//! Filter state shared by every report page.
//!
//! Dates travel to the report services as `dd-MM-yyyy` strings; the UI uses the
//! sentinel `"_"` for "no value" both in selects and in URL parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel used by selects and URL parameters for "all" / "not set".
pub const ALL: &str = "_";

/// Date format expected by the report services and used in URL parameters.
pub const PARAM_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Data final precisa ser maior que inicial!")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Anything that must be checked before a report request goes out.
pub trait ValidateFilter {
    fn validate(&self) -> Result<(), FilterError>;
}

/// Reports without filters.
impl ValidateFilter for () {
    fn validate(&self) -> Result<(), FilterError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Builds a range from URL parameters; `"_"`, empty or unparsable values mean unset.
    pub fn from_params(start: &str, end: &str) -> Self {
        Self {
            start: parse_param_date(start),
            end: parse_param_date(end),
        }
    }

    /// Start as sent to the services: `dd-MM-yyyy` or empty when unset.
    pub fn start_param(&self) -> String {
        self.start.map(format_param_date).unwrap_or_default()
    }

    pub fn end_param(&self) -> String {
        self.end.map(format_param_date).unwrap_or_default()
    }

    /// Start as written back into the URL: `dd-MM-yyyy` or `"_"`.
    pub fn start_url_value(&self) -> String {
        self.start
            .map(format_param_date)
            .unwrap_or_else(|| ALL.to_string())
    }

    pub fn end_url_value(&self) -> String {
        self.end
            .map(format_param_date)
            .unwrap_or_else(|| ALL.to_string())
    }

    /// Human label used in export filenames: unset bounds become `-`.
    pub fn label(&self) -> String {
        let start = self.start.map(format_param_date).unwrap_or_else(|| "-".into());
        let end = self.end.map(format_param_date).unwrap_or_else(|| "-".into());
        format!("{} À {}", start, end)
    }
}

impl ValidateFilter for DateRange {
    fn validate(&self) -> Result<(), FilterError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => {
                Err(FilterError::InvalidDateRange { start, end })
            }
            _ => Ok(()),
        }
    }
}

pub fn format_param_date(date: NaiveDate) -> String {
    date.format(PARAM_DATE_FORMAT).to_string()
}

pub fn parse_param_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() || value == ALL {
        return None;
    }
    NaiveDate::parse_from_str(value, PARAM_DATE_FORMAT).ok()
}

/// Value of a single-select filter; `"_"` selects the aggregate of all entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySelection(String);

impl EntitySelection {
    pub fn all() -> Self {
        Self(ALL.to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::all()
        } else {
            Self(value)
        }
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The outbound request parameter: `None` for `"_"`, so it is omitted.
    pub fn as_filter(&self) -> Option<&str> {
        if self.is_all() {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl Default for EntitySelection {
    fn default() -> Self {
        Self::all()
    }
}

impl From<String> for EntitySelection {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for EntitySelection {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Fuel cost basis: average purchase cost or current cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostBasis {
    #[default]
    #[serde(rename = "medio")]
    Average,
    #[serde(rename = "atual")]
    Current,
}

impl CostBasis {
    pub fn code(&self) -> &'static str {
        match self {
            CostBasis::Average => "medio",
            CostBasis::Current => "atual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostBasis::Average => "Custo Médio",
            CostBasis::Current => "Custo Atual",
        }
    }

    /// Unknown codes fall back to the average cost.
    pub fn from_code(code: &str) -> Self {
        match code {
            "atual" => CostBasis::Current,
            _ => CostBasis::Average,
        }
    }

    pub fn all() -> [CostBasis; 2] {
        [CostBasis::Average, CostBasis::Current]
    }
}

/// Filter of a report with a single entity dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub date_range: DateRange,
    pub selected_entity_id: EntitySelection,
    pub cost_basis: CostBasis,
}

impl ValidateFilter for FilterState {
    fn validate(&self) -> Result<(), FilterError> {
        self.date_range.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let range = DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 31)));
        let err = range.validate().unwrap_err();
        assert_eq!(err.to_string(), "Data final precisa ser maior que inicial!");
    }

    #[test]
    fn test_open_and_equal_ranges_are_valid() {
        assert!(DateRange::default().validate().is_ok());
        assert!(DateRange::new(Some(date(2024, 1, 1)), None).validate().is_ok());
        assert!(DateRange::new(None, Some(date(2024, 1, 1))).validate().is_ok());
        let same = date(2024, 3, 10);
        assert!(DateRange::new(Some(same), Some(same)).validate().is_ok());
    }

    #[test]
    fn test_param_dates() {
        let range = DateRange::from_params("01-01-2024", "_");
        assert_eq!(range.start, Some(date(2024, 1, 1)));
        assert_eq!(range.end, None);
        assert_eq!(range.start_param(), "01-01-2024");
        assert_eq!(range.end_param(), "");
        assert_eq!(range.end_url_value(), "_");
        assert_eq!(parse_param_date("2024-01-01"), None);
        assert_eq!(parse_param_date(""), None);
    }

    #[test]
    fn test_range_label() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert_eq!(range.label(), "01-01-2024 À 31-01-2024");
        assert_eq!(DateRange::default().label(), "- À -");
    }

    #[test]
    fn test_all_sentinel_is_omitted() {
        assert_eq!(EntitySelection::all().as_filter(), None);
        assert_eq!(EntitySelection::new("").as_filter(), None);
        assert_eq!(EntitySelection::new("42").as_filter(), Some("42"));
    }

    #[test]
    fn test_cost_basis_codes() {
        assert_eq!(CostBasis::from_code("atual"), CostBasis::Current);
        assert_eq!(CostBasis::from_code("medio"), CostBasis::Average);
        assert_eq!(CostBasis::from_code("???"), CostBasis::Average);
        assert_eq!(serde_json::to_string(&CostBasis::Current).unwrap(), "\"atual\"");
    }

    #[test]
    fn test_filter_state_validates_its_range() {
        let mut filter = FilterState::default();
        assert!(filter.validate().is_ok());
        filter.date_range = DateRange::new(Some(date(2024, 5, 2)), Some(date(2024, 5, 1)));
        assert!(filter.validate().is_err());
    }
}
