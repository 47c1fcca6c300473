#![allow(dead_code)]

//! Test infrastructure for lead-web route tests

use lead_client::{Client, SessionContext};
use lead_web::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use wiremock::MockServer;

pub const ADMIN_SECRET: &str = "s3cret";

/// Router whose backend is the given mock server.
pub fn create_test_app(backend: &MockServer, admin_secret: Option<&str>) -> Router {
    let client = Client::new(&backend.uri(), "/api/auth", SessionContext::in_memory());
    build_router(AppState::new(client, admin_secret.map(String::from)))
}

/// Router whose backend refuses connections.
pub fn create_unreachable_app() -> Router {
    let client = Client::new("http://127.0.0.1:1", "/api/auth", SessionContext::in_memory());
    build_router(AppState::new(client, Some(ADMIN_SECRET.to_string())))
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}
