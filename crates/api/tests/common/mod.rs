//! Shared harness for HTTP-level integration tests.
//!
//! Builds the same router (middleware stack included) that `main.rs` serves,
//! backed by the per-test SQLite database `#[sqlx::test]` provides.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use meshdeck_api::config::{AuthConfig, ServerConfig};
use meshdeck_api::router::build_app_router;
use meshdeck_api::state::AppState;

/// Bearer token accepted by the test configuration.
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "correct horse";

/// Build a test `ServerConfig` with fixed mock credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            admin_username: TEST_USERNAME.to_string(),
            admin_password: TEST_PASSWORD.to_string(),
            api_token: TEST_TOKEN.to_string(),
        },
    }
}

/// Build the full application router over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, "GET", path, None, None).await
}

pub async fn get_auth(app: Router, path: &str) -> Response<Body> {
    send(app, "GET", path, None, Some(TEST_TOKEN)).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", path, Some(body), None).await
}

pub async fn post_json_auth(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", path, Some(body), Some(TEST_TOKEN)).await
}

pub async fn patch_json_auth(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "PATCH", path, Some(body), Some(TEST_TOKEN)).await
}

pub async fn delete_auth(app: Router, path: &str) -> Response<Body> {
    send(app, "DELETE", path, None, Some(TEST_TOKEN)).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert the uniform failure envelope and return its error message.
pub async fn assert_error_envelope(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    json["error"].as_str().expect("error message").to_string()
}
