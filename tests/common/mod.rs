#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use url_encoder::routes::router;
use url_encoder::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

/// Test server running every route against a fresh registry.
pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Encodes `url` through the API and returns the assigned slug.
pub async fn encode_url(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/api/encode")
        .json(&json!({ "url": url }))
        .await;

    assert_eq!(response.status_code(), 201);

    response.json::<serde_json::Value>()["slug"]
        .as_str()
        .unwrap()
        .to_string()
}
