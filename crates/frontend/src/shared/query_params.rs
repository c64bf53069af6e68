//! Typed access to the page query string.
//!
//! The dashboard is opened from the ERP with `?idUsuario=..&dbNome=..`; report pages
//! also keep their filters there so a view can be shared by URL.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Parameters the ERP passes when it opens the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryParams {
    #[serde(rename = "idUsuario", default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<String>,
    #[serde(rename = "dbNome", default, skip_serializing_if = "Option::is_none")]
    pub db_nome: Option<String>,
}

impl EntryParams {
    /// Numeric user id, `None` when missing or malformed.
    pub fn user_id(&self) -> Option<i64> {
        self.id_usuario.as_deref()?.trim().parse().ok()
    }

    /// Tenant database name, `None` when missing or blank.
    pub fn tenant(&self) -> Option<&str> {
        self.db_nome
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn current() -> Self {
        parse_query(&current_search())
    }
}

/// `location.search` without the leading `?`.
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|search| search.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Parses a query string; malformed input yields the defaults.
pub fn parse_query<T>(search: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Ignoring malformed query string '{}': {}", search, e);
            T::default()
        }
    }
}

pub fn to_query_string<T: Serialize>(params: &T) -> Result<String, String> {
    serde_qs::to_string(params).map_err(|e| format!("Failed to encode query: {}", e))
}

/// Rewrites the query string of the current entry without adding a history step.
pub fn replace_query<T: Serialize>(params: &T) -> Result<(), String> {
    let query = to_query_string(params)?;
    let new_url = format!("{}?{}", current_path(), query);

    if current_search() == query {
        return Ok(());
    }

    let history = window()
        .ok_or("No window object")?
        .history()
        .map_err(|e| format!("History unavailable: {:?}", e))?;
    history
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        .map_err(|e| format!("Failed to replace URL: {:?}", e))
}

/// Moves to `path` keeping only the entry parameters.
pub fn push_path(path: &str, entry: &EntryParams) -> Result<(), String> {
    let query = to_query_string(entry)?;
    let new_url = if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    };

    let history = window()
        .ok_or("No window object")?
        .history()
        .map_err(|e| format!("History unavailable: {:?}", e))?;
    history
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        .map_err(|e| format!("Failed to push URL: {:?}", e))
}
