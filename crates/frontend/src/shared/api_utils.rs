//! API utilities for frontend-backend communication
//!
//! Provides the API base configuration, query-string construction and the
//! JSON GET used by every list and detail loader.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Id of the DOM container the application is mounted into
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Attribute on the mount container that overrides the API origin
const API_BASE_ATTRIBUTE: &str = "data-api-base";

/// Where the REST API lives
///
/// An empty base URL means "same origin": requests go to relative paths
/// like `/order/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads the base URL from `<div id="app" data-api-base="...">`
    ///
    /// Falls back to same origin when the container or attribute is missing.
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
            .and_then(|el| el.get_attribute(API_BASE_ATTRIBUTE))
            .unwrap_or_default();
        Self::new(base)
    }

    /// Build a full API URL from a path and query pairs
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.url("/order/list", &[("page", "1".to_string())]);
    /// ```
    pub fn url(&self, path: &str, pairs: &[(&str, String)]) -> String {
        build_url(&self.base_url, path, pairs)
    }
}

/// Joins `key=value` pairs with `&`, percent-encoding every value
///
/// Pair order is preserved.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn build_url(base: &str, path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, encode_query(pairs))
    }
}

/// Failed fetch
///
/// Callers treat every variant the same way; the variant only shapes the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// GET `url` and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        assert_eq!(ApiConfig::new("http://localhost:8080/").base_url, "http://localhost:8080");
        assert_eq!(ApiConfig::new("  ").base_url, "");
        assert_eq!(ApiConfig::default().base_url, "");
    }

    #[test]
    fn test_same_origin_url() {
        let config = ApiConfig::default();
        let url = config.url(
            "/order/stats/products",
            &[("page", "2".to_string()), ("size", "20".to_string())],
        );
        assert_eq!(url, "/order/stats/products?page=2&size=20");
    }

    #[test]
    fn test_url_without_query() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(config.url("/order/7/items", &[]), "https://api.example.com/order/7/items");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = encode_query(&[
            ("shopName", "Tea & Co".to_string()),
            ("startTime", "2024-01-02 03:04:05".to_string()),
        ]);
        assert_eq!(query, "shopName=Tea%20%26%20Co&startTime=2024-01-02%2003%3A04%3A05");
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(500).to_string(), "server responded with HTTP 500");
        assert!(FetchError::Network("offline".into()).to_string().contains("offline"));
    }
}
