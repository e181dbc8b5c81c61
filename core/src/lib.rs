//! Small JSON HTTP client facade.
//!
//! # Overview
//! `RequestClient` exposes `get`/`post`/`put`/`patch`/`delete` and layers
//! default headers, JSON body encoding and typed JSON decoding over a
//! pluggable `Transport`. Each call issues exactly one request and decodes
//! one response; there are no retries, caches or background tasks.
//!
//! # Design
//! - `RequestClient` holds only an immutable `ClientConfig` and a transport.
//! - Each call is split into `resolve` (produces an `HttpRequest`), the
//!   transport round-trip, and `parse_json` (consumes an `HttpResponse`), so
//!   the I/O boundary is explicit and both halves are testable as data.
//! - Every failure comes back as `Err(ClientError)`; the future always
//!   completes.
//! - `ReqwestTransport` (feature `reqwest`, on by default) is the stock
//!   transport; `transport_fn` adapts any async closure.
//!
//! ```no_run
//! use httpflow_core::{ClientConfig, RequestClient, RequestOptions};
//! use serde_json::{json, Value};
//!
//! # async fn run() -> Result<(), httpflow_core::ClientError> {
//! let client = RequestClient::new(ClientConfig::new().base_url("http://localhost:3000"));
//! let created: Value = client
//!     .post("/items", RequestOptions::new().json(json!({"name": "bolt"})))
//!     .await?;
//! let items: Vec<Value> = client.get("/items").await?;
//! # let _ = (created, items);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod headers;
pub mod http;
pub mod transport;
pub mod types;

pub use client::RequestClient;
pub use config::ClientConfig;
pub use error::{ClientError, TransportError};
pub use form::FormData;
pub use headers::Headers;
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{transport_fn, FnTransport, Transport};
pub use types::{RequestBody, RequestOptions};
