//! Per-call request options.
//!
//! # Design
//! `RequestOptions` carries what a single verb call adds on top of the
//! client configuration: headers that override the instance defaults, an
//! optional body, and options the client forwards to the transport without
//! interpreting them.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::error::ClientError;
use crate::form::FormData;
use crate::headers::Headers;

/// Body supplied by the caller, before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized to JSON text and sent as `application/json` unless the
    /// caller overrides the content type.
    Json(serde_json::Value),

    /// Encoded as multipart and sent with the form's own content type.
    FormData(FormData),
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<FormData> for RequestBody {
    fn from(form: FormData) -> Self {
        RequestBody::FormData(form)
    }
}

/// Options for a single verb call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: Headers,
    pub body: Option<RequestBody>,
    pub timeout: Option<Duration>,
    pub passthrough: BTreeMap<String, serde_json::Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json(self, value: serde_json::Value) -> Self {
        self.body(RequestBody::Json(value))
    }

    /// Use any serializable value as the JSON body.
    pub fn try_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(self.json(value))
    }

    pub fn form(self, form: FormData) -> Self {
        self.body(RequestBody::FormData(form))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Forward an option to the transport unchanged.
    pub fn passthrough(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.passthrough.insert(key.into(), value);
        self
    }
}
