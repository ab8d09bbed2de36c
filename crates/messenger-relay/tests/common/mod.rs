//! Common test utilities for integration tests.

use async_trait::async_trait;
use axum::Router;
use heimdall_client::{AssetSearch, HeimdallError, SearchHit};
use messenger_client::MessengerClient;
use messenger_relay::{
    api::{create_router, AppState},
    commands::default_registry,
    Dispatcher, MessageParser,
};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use wiremock::{MockServer, Request};

pub const APP_SECRET: &str = "test-app-secret";
pub const VALIDATION_TOKEN: &str = "test-validation-token";

/// Search backend with a fixed catalogue.
pub struct StubSearch;

#[async_trait]
impl AssetSearch for StubSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, HeimdallError> {
        if query == "matrix" {
            Ok(vec![SearchHit {
                title: "Matrix".into(),
                url: "https://store.example/1001".into(),
            }])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Build the relay router with the Send API pointed at a mock server.
pub fn test_app(messenger_server: &MockServer) -> Router {
    let messenger = MessengerClient::new(
        messenger_server.uri(),
        SecretString::new("test-page-token".into()),
        Duration::from_secs(5),
    )
    .unwrap();

    let dispatcher = Dispatcher::new(
        Arc::new(default_registry(Arc::new(StubSearch))),
        MessageParser::new(Some("/mxd-search".into())),
        Arc::new(messenger),
    );

    create_router(AppState::new(
        dispatcher,
        SecretString::new(APP_SECRET.into()),
        SecretString::new(VALIDATION_TOKEN.into()),
    ))
}

/// `sha1=<hex>` header value for a body.
pub fn sign(body: &str) -> String {
    format!(
        "sha1={}",
        messenger_relay::signature::digest(APP_SECRET, body.as_bytes()).unwrap()
    )
}

/// Page payload with one text message per entry in `texts`.
pub fn page_payload(texts: &[&str]) -> String {
    let messaging: Vec<serde_json::Value> = texts
        .iter()
        .map(|text| {
            serde_json::json!({
                "sender": { "id": "USER_ID" },
                "recipient": { "id": "PAGE_ID" },
                "timestamp": 1458692752478i64,
                "message": { "mid": "mid.1457764197618:41d102a3e1ae206a38", "text": text }
            })
        })
        .collect();

    serde_json::json!({
        "object": "page",
        "entry": [{ "id": "PAGE_ID", "time": 1458692752478i64, "messaging": messaging }]
    })
    .to_string()
}

/// Wait until the mock server has seen `count` requests.
pub async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<Request> {
    for _ in 0..100 {
        let requests = server.received_requests().await.unwrap_or_default();
        if requests.len() >= count {
            return requests;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("expected {} outbound requests", count);
}

/// Text of an outbound Send API request.
pub fn sent_text(request: &Request) -> String {
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    body["message"]["text"].as_str().unwrap().to_string()
}
