//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every verb of
//! `RequestClient` over real HTTP through the default reqwest transport.

use std::net::SocketAddr;
use std::time::Duration;

use httpflow_core::{
    ClientConfig, ClientError, FormData, HttpMethod, RequestClient, RequestOptions, Transport,
    TransportError,
};
use mock_server::Echo;
use serde_json::{json, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

async fn start_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run(listener).await.unwrap() });
    addr
}

#[tokio::test]
async fn every_verb_round_trips() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    // Step 1: plain get of a JSON document.
    let item: Value = client.get("/items").await.unwrap();
    assert_eq!(item, json!({"id": 1}));

    // Step 2: body-carrying verbs send JSON text.
    let body = || RequestOptions::new().json(json!({"name": "Bolt", "quantity": 2}));
    let posted: Echo = client.post("/echo", body()).await.unwrap();
    let put: Echo = client.put("/echo", body()).await.unwrap();
    let patched: Echo = client.patch("/echo", body()).await.unwrap();
    for (echo, method) in [(&posted, "POST"), (&put, "PUT"), (&patched, "PATCH")] {
        assert_eq!(echo.method, method);
        let sent: Value = serde_json::from_str(&echo.body).unwrap();
        assert_eq!(sent, json!({"name": "Bolt", "quantity": 2}), "{method}");
    }

    // Step 3: delete without options sends no body.
    let deleted: Echo = client.delete("/echo").await.unwrap();
    assert_eq!(deleted.method, "DELETE");
    assert!(deleted.body.is_empty());

    // Step 4: unknown route — 404 with an empty body fails to decode.
    let err = client.get::<Value>("/missing").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { status: 404, .. }));
}

#[tokio::test]
async fn headers_and_json_body_reach_the_server() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(
        ClientConfig::new()
            .base_url(format!("http://{addr}"))
            .header("X-Client", "httpflow")
            .header("X-Tenant", "instance"),
    );

    let echo: Echo = client
        .post(
            "/echo",
            RequestOptions::new()
                .header("x-tenant", "call")
                .json(json!({"hello": "world"})),
        )
        .await
        .unwrap();

    assert_eq!(echo.method, "POST");
    assert_eq!(echo.path, "/echo");
    assert_eq!(echo.headers["content-type"], "application/json");
    assert_eq!(echo.headers["x-client"], "httpflow");
    assert_eq!(echo.headers["x-tenant"], "call");
    assert_eq!(echo.body, r#"{"hello":"world"}"#);
}

#[tokio::test]
async fn form_data_is_sent_with_its_own_content_type() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let form = FormData::with_boundary("integration-boundary")
        .text("title", "report")
        .file("upload", "notes.txt", "text/plain", b"line one".to_vec());
    let expected_body = String::from_utf8(form.encode()).unwrap();

    let echo: Echo = client
        .put("/echo", RequestOptions::new().form(form))
        .await
        .unwrap();

    assert_eq!(echo.method, "PUT");
    assert_eq!(
        echo.headers["content-type"],
        "multipart/form-data; boundary=integration-boundary"
    );
    assert_eq!(echo.body, expected_body);
}

#[tokio::test]
async fn concurrent_requests_resolve_independently() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let (a, b) = tokio::join!(
        client.delete_with::<Echo>("/echo", RequestOptions::new().header("X-Call", "a")),
        client.get_with::<Echo>("/echo", RequestOptions::new().header("X-Call", "b")),
    );
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_eq!((a.method.as_str(), a.headers["x-call"].as_str()), ("DELETE", "a"));
    assert_eq!((b.method.as_str(), b.headers["x-call"].as_str()), ("GET", "b"));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let err = client.get::<Value>("/text").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn connection_refused_completes_with_transport_error() {
    init_logging();
    // Grab a free port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));
    let result = client
        .get_with::<Value>("/items", RequestOptions::new().timeout(Duration::from_secs(5)))
        .await;
    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::Connection(_)))
    ));
}

#[tokio::test]
async fn elapsed_timeout_is_a_timeout_error() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let result = client
        .get_with::<Value>("/slow", RequestOptions::new().timeout(Duration::from_millis(50)))
        .await;
    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::Timeout))
    ));
}

#[tokio::test]
async fn malformed_header_name_is_an_invalid_request() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let result = client
        .get_with::<Echo>("/echo", RequestOptions::new().header("bad header", "x"))
        .await;
    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::InvalidRequest(_)))
    ));
}

#[tokio::test]
async fn repeated_response_headers_are_all_kept() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let request = client
        .resolve(HttpMethod::Get, "/cookies", RequestOptions::new())
        .unwrap();
    let response = client.transport().fetch(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(
        response.headers.get_all("set-cookie").collect::<Vec<_>>(),
        vec!["a=1", "b=2"]
    );
    let body: Value = client.parse_json(response).unwrap();
    assert_eq!(body, json!({"cookies": 2}));
}

#[tokio::test]
async fn passthrough_options_do_not_reach_the_wire() {
    init_logging();
    let addr = start_server().await;
    let client = RequestClient::new(ClientConfig::new().base_url(format!("http://{addr}")));

    let echo: Echo = client
        .get_with(
            "/echo",
            RequestOptions::new()
                .passthrough("redirect", json!("manual"))
                .passthrough("credentials", json!("include")),
        )
        .await
        .unwrap();
    assert_eq!(echo.method, "GET");
    assert!(!echo.headers.contains_key("redirect"));
    assert!(!echo.headers.contains_key("credentials"));
}
