//! HTTP-level integration tests for the model CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error_envelope, body_json, delete_auth, get_auth, patch_json_auth, post_json_auth,
};
use serde_json::json;
use sqlx::SqlitePool;

/// First authenticated list request lazily seeds the demo models, newest
/// first.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_seeds_and_sorts_newest_first(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/models").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let items = body["data"].as_array().expect("data is an array");
    assert_eq!(items.len(), 3);
    let titles: Vec<_> = items.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Astronaut", "Neil Armstrong Spacesuit", "Canoe"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_assigns_id_and_default_config(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = json!({ "title": "  Rover  ", "url": "https://assets.test/rover.glb" });
    let response = post_json_auth(app.clone(), "/api/models", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    let model = &created["data"];
    let id = model["id"].as_str().expect("server-generated id");
    assert_eq!(model["title"], "Rover", "title is trimmed");
    assert_eq!(model["size"], "Pending");
    assert_eq!(model["config"]["autoRotate"], true);
    assert_eq!(model["config"]["exposure"], 1.0);

    // Created model appears at the top of the list (newest first).
    let list = body_json(get_auth(app, "/api/models").await).await;
    assert_eq!(list["data"][0]["id"], id);
    assert_eq!(list["data"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_title_and_url(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json_auth(app.clone(), "/api/models", json!({ "title": "No url" })).await;
    assert_error_envelope(response, StatusCode::BAD_REQUEST).await;

    let response =
        post_json_auth(app, "/api/models", json!({ "title": "   ", "url": "x" })).await;
    assert_error_envelope(response, StatusCode::BAD_REQUEST).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_returns_model_or_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/models/m1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Astronaut");

    let response = get_auth(app, "/api/models/does-not-exist").await;
    assert_error_envelope(response, StatusCode::NOT_FOUND).await;
}

/// Patching `config.exposure` alone preserves the other config fields, and
/// scalar fields shallow-merge.
#[sqlx::test(migrations = "../db/migrations")]
async fn patch_deep_merges_config(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = json!({ "config": { "exposure": 0.25 } });
    let response = patch_json_auth(app.clone(), "/api/models/m1", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["data"]["config"]["exposure"], 0.25);
    assert_eq!(updated["data"]["config"]["autoRotate"], true);
    assert_eq!(updated["data"]["config"]["cameraControls"], true);
    assert_eq!(updated["data"]["title"], "Astronaut");

    // Persisted, not just echoed.
    let fetched = body_json(get_auth(app, "/api/models/m1").await).await;
    assert_eq!(fetched["data"]["config"]["exposure"], 0.25);
    assert_eq!(fetched["data"]["config"]["autoRotate"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_missing_model_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = patch_json_auth(app, "/api/models/ghost", json!({ "title": "x" })).await;
    assert_error_envelope(response, StatusCode::NOT_FOUND).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_reports_deleted_flag(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = delete_auth(app.clone(), "/api/models/m2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["deleted"], true);
    assert_eq!(body["data"]["id"], "m2");

    // Deleting a nonexistent model is still a success envelope.
    let response = delete_auth(app.clone(), "/api/models/m2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["deleted"], false);

    let list = body_json(get_auth(app, "/api/models").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}
