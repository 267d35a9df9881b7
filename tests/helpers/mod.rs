//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use gamehub_core::config::AppConfig;
use gamehub_core::config::database::DatabaseProvider;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application backed by the in-memory repository
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        Self::with_config(config).await
    }

    /// Create a test application with explicit configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let state = gamehub_api::build_state(config)
            .await
            .expect("Failed to build application state");

        Self {
            router: gamehub_api::build_app(state),
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);

        let req = match body {
            Some(b) => {
                let body_str = serde_json::to_string(&b).expect("Failed to serialize body");
                builder
                    .header("Content-Type", "application/json")
                    .body(Body::from(body_str))
            }
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when the body is empty or not JSON)
    pub body: Value,
}
