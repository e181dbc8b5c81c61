//! HTTP transport types exchanged between the client and its transport.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `RequestClient::resolve` builds an `HttpRequest` without touching the
//! network, a `Transport` turns it into an `HttpResponse`, and
//! `RequestClient::parse_json` decodes that response. Keeping both halves as
//! data lets tests assert on exactly what would go over the wire.
//!
//! All fields use owned types so values can be moved into a transport future
//! without lifetime concerns.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::headers::Headers;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    /// JSON text produced from a `RequestBody::Json` value.
    Text(String),
    /// Raw bytes of an encoded multipart form, forwarded untouched.
    Bytes(Vec<u8>),
}

impl HttpBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HttpBody::Text(text) => text.as_bytes(),
            HttpBody::Bytes(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            HttpBody::Text(text) => text.into_bytes(),
            HttpBody::Bytes(bytes) => bytes,
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `RequestClient::resolve`. `passthrough` carries caller options the
/// client does not interpret; transports may act on keys they recognize.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<HttpBody>,
    pub timeout: Option<Duration>,
    pub passthrough: BTreeMap<String, serde_json::Value>,
}

/// An HTTP response described as plain data.
///
/// The body is fully buffered; streaming is not supported. Header names may
/// repeat (e.g. `Set-Cookie`); use `Headers::get_all` to read every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: body.into(),
        }
    }
}
