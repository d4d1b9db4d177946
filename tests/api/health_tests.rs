//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{json_body, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

/// Liveness does not depend on the database
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "alive");
}

/// Readiness reports 503 while the database is unreachable
#[tokio::test]
async fn test_readiness_without_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = json_body(response).await;
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["checks"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_http_counters() {
    let app = TestApp::new().await;
    app.request("GET", "/health").await;

    let response = app.request("GET", "/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("course_enrollment_http_requests_total"));
}
