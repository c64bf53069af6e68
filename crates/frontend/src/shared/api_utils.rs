//! API utilities for frontend-backend communication
//!
//! Report and reference services live on the same host as the dashboard, port 3000.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends url-encoded query pairs to `path`.
pub fn with_query(path: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let encoded: Vec<String> = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("{}?{}", path, encoded.join("&"))
}

/// GET `path` with `query` and decode the JSON body.
pub async fn get_json<T>(path: &str, query: &[(&str, String)]) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = api_url(&with_query(path, query));
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        let url = with_query(
            "/api/custo-producao/talhao",
            &[("safraId", "4,5".to_string()), ("startDate", "01-01-2024".to_string())],
        );
        assert_eq!(url, "/api/custo-producao/talhao?safraId=4%2C5&startDate=01-01-2024");
    }

    #[test]
    fn test_with_query_keeps_empty_values() {
        let url = with_query("/api/x", &[("endDate", String::new())]);
        assert_eq!(url, "/api/x?endDate=");
        assert_eq!(with_query("/api/x", &[]), "/api/x");
    }
}
