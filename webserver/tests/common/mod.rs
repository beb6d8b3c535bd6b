//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use webserver::{WebServer, WebServerState};

/// Router backed by a fresh state
pub fn create_test_router() -> Router {
    WebServer::new(WebServerState::new()).build_router()
}

/// Send a GET through the router and decode the JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Shorthand for the addition endpoint
pub async fn calculate(query: &str) -> (StatusCode, Value) {
    get_json(create_test_router(), &format!("/api/calculate?{query}")).await
}
