//! JSON request client over a pluggable transport.
//!
//! # Design
//! `RequestClient` holds an immutable `ClientConfig` and a `Transport`, and
//! carries no mutable state between calls. Every verb method funnels through
//! one executor that is split the same way for every call:
//! `resolve` produces an `HttpRequest` without I/O, the transport executes it,
//! and `parse_json` consumes the `HttpResponse`. Both halves are public so a
//! host can run the round-trip itself.
//!
//! Header precedence is built-in `Content-Type: application/json`, then the
//! instance headers, then the per-call headers; later layers win.

use serde::de::DeserializeOwned;

use crate::config::{builtin_headers, ClientConfig};
use crate::error::ClientError;
use crate::headers::{Headers, CONTENT_TYPE};
use crate::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{RequestBody, RequestOptions};

/// Facade offering `get`/`post`/`put`/`patch`/`delete` over a transport.
///
/// Calls are independent: concurrent calls share only the read-only config.
#[derive(Debug, Clone)]
pub struct RequestClient<T> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl RequestClient<crate::transport::ReqwestTransport> {
    /// Client backed by a fresh `reqwest::Client`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, crate::transport::ReqwestTransport::new())
    }
}

impl<T: Transport> RequestClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        self.execute(HttpMethod::Get, endpoint, RequestOptions::default())
            .await
    }

    pub async fn get_with<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        self.execute(HttpMethod::Get, endpoint, options).await
    }

    pub async fn post<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        self.execute(HttpMethod::Post, endpoint, options).await
    }

    pub async fn put<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        self.execute(HttpMethod::Put, endpoint, options).await
    }

    pub async fn patch<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        self.execute(HttpMethod::Patch, endpoint, options).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        self.execute(HttpMethod::Delete, endpoint, RequestOptions::default())
            .await
    }

    pub async fn delete_with<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        self.execute(HttpMethod::Delete, endpoint, options).await
    }

    /// Build the request a verb call would send, without sending it.
    pub fn resolve(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<HttpRequest, ClientError> {
        let RequestOptions {
            headers,
            body,
            timeout,
            passthrough,
        } = options;

        let mut defaults = Headers::merge([&builtin_headers(), &self.config.headers]);
        let body = match body {
            None => None,
            Some(RequestBody::Json(value)) => {
                let text = serde_json::to_string(&value)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?;
                Some(HttpBody::Text(text))
            }
            Some(RequestBody::FormData(form)) => {
                // The form's boundary type replaces the JSON default.
                defaults.insert(CONTENT_TYPE, form.content_type());
                Some(HttpBody::Bytes(form.encode()))
            }
        };

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.config.base_url, endpoint),
            headers: Headers::merge([&defaults, &headers]),
            body,
            timeout,
            passthrough,
        })
    }

    /// Decode a response body as JSON. The status code is not checked.
    pub fn parse_json<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ClientError> {
        serde_json::from_slice(&response.body).map_err(|e| ClientError::Decode {
            status: response.status,
            message: e.to_string(),
        })
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        let request = self.resolve(method, endpoint, options)?;
        log::debug!("{} {}", request.method, request.url);

        let url = request.url.clone();
        let response = self.transport.fetch(request).await.map_err(|e| {
            log::warn!("{method} {url} failed: {e}");
            ClientError::from(e)
        })?;
        log::debug!("{method} {url} -> {}", response.status);

        self.parse_json(response).inspect_err(|e| {
            log::warn!("{method} {url}: {e}");
        })
    }
}
