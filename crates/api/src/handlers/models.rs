//! Handlers for the `/api/models` resource and the public viewer read.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use meshdeck_core::error::CoreError;
use meshdeck_core::model::{CreateModel, Model3D, ModelUpdate};
use meshdeck_db::EntityStore;

use crate::auth::AuthToken;
use crate::error::AppResult;
use crate::handlers::require_str;
use crate::response::Envelope;
use crate::state::AppState;

/// Raw request body for `POST /api/models`. Fields are optional here so
/// validation can produce a 400 envelope instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub poster_url: Option<String>,
}

/// Response body for `DELETE /api/models/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub id: String,
    pub deleted: bool,
}

/// GET /api/models — all models, newest first.
pub async fn list_models(
    _auth: AuthToken,
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<Model3D>>>> {
    let mut models: Vec<Model3D> = EntityStore::list(&state.pool).await?;
    models.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(Envelope::ok(models)))
}

/// GET /api/models/{id}
pub async fn get_model(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<Model3D>>> {
    let model = EntityStore::get(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Model", &id))?;
    Ok(Json(Envelope::ok(model)))
}

/// GET /api/viewer/{id} — public read for the embed surface. No auth.
pub async fn viewer_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<Model3D>>> {
    let model = EntityStore::get(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Model", &id))?;
    Ok(Json(Envelope::ok(model)))
}

/// POST /api/models
///
/// Creates a model with a server-generated UUID, the default viewer config,
/// and `size = "Pending"` until measured.
pub async fn create_model(
    _auth: AuthToken,
    State(state): State<AppState>,
    Json(input): Json<CreateModelRequest>,
) -> AppResult<Json<Envelope<Model3D>>> {
    let title = require_str(input.title.as_deref(), "title")?;
    let url = require_str(input.url.as_deref(), "url")?;

    let model = Model3D::new(CreateModel {
        title,
        url,
        poster_url: input
            .poster_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
    });

    let created = EntityStore::create(&state.pool, model).await?;
    tracing::info!(model_id = %created.id, title = %created.title, "Model created");
    Ok(Json(Envelope::ok(created)))
}

/// PATCH /api/models/{id}
///
/// Shallow-merges scalar fields; `config` is deep-merged field by field, so
/// patching `exposure` alone leaves `autoRotate` untouched.
pub async fn update_model(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ModelUpdate>,
) -> AppResult<Json<Envelope<Model3D>>> {
    let updated = EntityStore::mutate(&state.pool, &id, |model: &mut Model3D| {
        update.apply(model);
    })
    .await?
    .ok_or_else(|| CoreError::not_found("Model", &id))?;

    Ok(Json(Envelope::ok(updated)))
}

/// DELETE /api/models/{id}
///
/// Always a success envelope; `deleted: false` reports a missing id without
/// an error, matching the idempotent delete contract.
pub async fn delete_model(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<DeleteResult>>> {
    let deleted = EntityStore::delete::<Model3D>(&state.pool, &id).await?;
    if deleted {
        tracing::info!(model_id = %id, "Model deleted");
    }
    Ok(Json(Envelope::ok(DeleteResult { id, deleted })))
}
