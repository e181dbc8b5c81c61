//! Client configuration.
//!
//! A `ClientConfig` is fixed when the client is constructed. It can be
//! assembled with the builder methods or deserialized from JSON:
//!
//! ```
//! use httpflow_core::ClientConfig;
//!
//! let config: ClientConfig =
//!     serde_json::from_str(r#"{"baseUrl":"https://api.example.com","headers":{"X-Api-Key":"k"}}"#)
//!         .unwrap();
//! assert_eq!(config.base_url, "https://api.example.com");
//! ```

use serde::{Deserialize, Serialize};

use crate::headers::{Headers, APPLICATION_JSON, CONTENT_TYPE};

/// Instance-level settings shared by every call of a `RequestClient`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Prepended verbatim to every endpoint. No slash normalization.
    #[serde(alias = "baseURLPrefix", alias = "baseURL")]
    pub base_url: String,

    /// Instance default headers, layered over the built-in JSON content type.
    #[serde(alias = "defaultHeaders")]
    pub headers: Headers,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }
}

/// Headers applied to every request before any configured ones.
pub fn builtin_headers() -> Headers {
    Headers::new().with(CONTENT_TYPE, APPLICATION_JSON)
}
