//! Integration tests for the health endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body.get("version").is_some());

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .expect("No Content-Type header");
    assert!(content_type.starts_with("application/json"));
}
