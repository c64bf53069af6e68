//! Page category constants.
//!
//! Every page root carries an HTML `id` in the format `{module}--{category}`
//! (e.g. `"d401_fuel_details--dashboard"`) and `data-page-category` with one of the
//! constants below, so a DOM id leads straight to the source directory.

/// Full report page with its own filters.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Report widget nested in a host page that owns the filters.
pub const PAGE_CAT_REPORT: &str = "report";
