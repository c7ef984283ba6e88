#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use link_registry::routes::{app_router, normalized};
use link_registry::state::AppState;
use serde_json::{Value, json};

pub fn create_test_state() -> AppState {
    AppState::in_memory("")
}

pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(app_router(state.clone())).unwrap();
    (server, state)
}

/// Serves the router the way the binary does, with trailing slashes trimmed.
pub fn create_normalized_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let app = ServiceExt::<Request>::into_make_service(normalized(app_router(state.clone())));
    let server = TestServer::new(app).unwrap();
    (server, state)
}

/// Shortens `url` through the API and returns the response body.
pub async fn shorten(server: &TestServer, body: Value) -> Value {
    let response = server.post("/shorten").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn shorten_url(server: &TestServer, url: &str) -> String {
    let json = shorten(server, json!({ "url": url })).await;
    json["alias"].as_str().unwrap().to_string()
}
