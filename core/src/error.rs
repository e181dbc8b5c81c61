//! Error types for the request client.
//!
//! # Design
//! Every failure of a verb call lands in `ClientError`, so the call's future
//! always completes and callers tell success from failure by matching on the
//! `Result`. Failures raised by the transport keep their own enum so custom
//! transports can report them without knowing about JSON decoding.

use thiserror::Error;

/// Errors reported by a `Transport` while executing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The host could not be reached or the connection was dropped.
    #[error("connection error: {0}")]
    Connection(String),

    /// The caller-supplied timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The request could not be built (bad URL, invalid header, ...).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Other(String),
}

/// Errors returned by `RequestClient` verb methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request body could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not valid JSON for the requested type.
    #[error("HTTP {status}: response body could not be decoded: {message}")]
    Decode { status: u16, message: String },
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::InvalidRequest(err.to_string())
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}
