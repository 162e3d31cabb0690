//! Integration tests for health probes and cross-cutting middleware.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

#[tokio::test]
async fn test_health_reports_version() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].as_str().is_some());
}

#[tokio::test]
async fn test_ready_fails_when_database_is_unreachable() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health/ready", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");
    assert_eq!(response.body["message"], "database unreachable");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/jobs", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    let app = helpers::TestApp::new().await;
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/job")
        .header("Origin", "https://board.example")
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .expect("request");

    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
