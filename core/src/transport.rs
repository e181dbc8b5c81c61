//! The fetch primitive behind `RequestClient`.
//!
//! # Design
//! `Transport` is the only place I/O happens. The client hands it a fully
//! resolved `HttpRequest` and expects a fully buffered `HttpResponse` back.
//! `ReqwestTransport` is the default; `transport_fn` adapts an async closure,
//! which is how a host supplies its own fetch function and how tests mock
//! the network.

use std::future::Future;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A `Transport` backed by an async closure. Built with [`transport_fn`].
#[derive(Clone)]
pub struct FnTransport<F>(F);

impl<F> std::fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}

/// Wrap `f` so it can serve as a client's transport.
///
/// ```
/// use httpflow_core::{transport_fn, ClientConfig, HttpRequest, HttpResponse, RequestClient};
///
/// let client = RequestClient::with_transport(
///     ClientConfig::new(),
///     transport_fn(|_req: HttpRequest| async { Ok(HttpResponse::new(200, r#"{"ok":true}"#)) }),
/// );
/// # let _ = client;
/// ```
pub fn transport_fn<F, Fut>(f: F) -> FnTransport<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HttpResponse, TransportError>> + Send + 'static,
{
    FnTransport(f)
}

#[async_trait]
impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HttpResponse, TransportError>> + Send + 'static,
{
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (self.0)(request).await
    }
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use async_trait::async_trait;

    use crate::error::TransportError;
    use crate::headers::Headers;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    use super::Transport;

    /// reqwest-based transport.
    ///
    /// Honours the method, URL, headers, body and per-request `timeout`.
    /// reqwest has no per-request redirect or credentials policy, so every
    /// `passthrough` entry is ignored (and logged at debug level); configure
    /// such behaviour on the `reqwest::Client` passed to `from_reqwest`.
    /// Repeated response headers are kept as separate entries.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        inner: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Reuse an existing, possibly customized, reqwest client.
        pub fn from_reqwest(client: reqwest::Client) -> Self {
            Self { inner: client }
        }
    }

    fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self
                .inner
                .request(to_reqwest_method(request.method), &request.url);

            for (name, value) in request.headers.iter() {
                builder = builder.header(name, value);
            }
            if let Some(timeout) = request.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(body) = request.body {
                builder = builder.body(body.into_bytes());
            }
            if !request.passthrough.is_empty() {
                log::debug!(
                    "reqwest transport ignores passthrough options: {:?}",
                    request.passthrough.keys().collect::<Vec<_>>()
                );
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();

            // Collect all the headers we've received, repeated names included
            let mut headers = Headers::new();
            for (name, value) in response.headers() {
                let value = match value.to_str() {
                    Ok(value) => value.to_string(),
                    Err(_) => {
                        log::warn!("response header {name} is not visible ASCII, decoding lossily");
                        String::from_utf8_lossy(value.as_bytes()).into_owned()
                    }
                };
                headers.append(name.as_str(), value);
            }

            let body = response.bytes().await?.to_vec();

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
