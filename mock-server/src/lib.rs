//! Fixture HTTP server for exercising the request client over real sockets.
//!
//! Routes:
//! - `GET /items` returns the fixed JSON document `{"id":1}`
//! - `ANY /echo` reflects what it received as an `Echo`
//! - `GET /text` returns a body that is not JSON
//! - `GET /slow` answers after `SLOW_DELAY`
//! - `GET /cookies` sets two `Set-Cookie` headers

use std::{collections::HashMap, time::Duration};

use axum::{
    body::Bytes,
    http::{header::SET_COOKIE, HeaderMap, Method, Uri},
    response::{AppendHeaders, IntoResponse},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const SLOW_DELAY: Duration = Duration::from_secs(2);

/// What `/echo` saw: method, path, headers (lowercased names) and body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/items", get(items))
        .route("/echo", any(echo))
        .route("/text", get(text))
        .route("/slow", get(slow))
        .route("/cookies", get(cookies))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("mock server listening on {addr}");
    }
    axum::serve(listener, app()).await
}

async fn items() -> Json<Value> {
    Json(json!({"id": 1}))
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    log::debug!("echo {method} {uri}");
    let headers = headers
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn text() -> &'static str {
    "plain text, not json"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(SLOW_DELAY).await;
    Json(json!({"slow": true}))
}

async fn cookies() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, "a=1"), (SET_COOKIE, "b=2")]),
        Json(json!({"cookies": 2})),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_serializes_to_json() {
        let echo = Echo {
            method: "GET".to_string(),
            path: "/echo".to_string(),
            headers: HashMap::from([("x-a".to_string(), "1".to_string())]),
            body: String::new(),
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["headers"]["x-a"], "1");
        assert_eq!(json["body"], "");
    }

    #[test]
    fn echo_rejects_missing_fields() {
        let result: Result<Echo, _> = serde_json::from_str(r#"{"method":"GET"}"#);
        assert!(result.is_err());
    }
}
