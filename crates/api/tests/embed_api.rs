//! Integration tests for the public embed page and health check.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn embed_page_renders_viewer_element(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/embed/m1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<model-viewer"));
    assert!(html.contains("Astronaut.glb"));
    // Seed model m1 has auto-rotate on.
    assert!(html.contains("auto-rotate"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn embed_page_respects_model_config(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    // Seed model m2 has autoRotate disabled.
    let html = body_text(get(app, "/embed/m2").await).await;
    assert!(!html.contains("auto-rotate"));
    assert!(html.contains("camera-controls"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn embed_unknown_model_is_404_html(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/embed/ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("not found"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_store_status(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
}
