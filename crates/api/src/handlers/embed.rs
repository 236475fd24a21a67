//! Public `/embed/{id}` page.
//!
//! Serves a self-contained HTML page that mounts the third-party
//! `<model-viewer>` element with the model's stored config. The page script
//! carries the viewer glue: load/error/progress tracking, a diagnostic HEAD
//! request on error, and AR gating on secure context + device capability.

use std::sync::OnceLock;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, Environment, Value};

use meshdeck_core::model::Model3D;
use meshdeck_db::EntityStore;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

static TEMPLATES: OnceLock<Environment<'static>> = OnceLock::new();

fn templates() -> &'static Environment<'static> {
    TEMPLATES.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template("embed.html", include_str!("../../templates/embed.html"))
            .expect("embed template must parse");
        env
    })
}

/// GET /embed/{id} — public HTML embed surface for iframes.
pub async fn embed_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let model: Option<Model3D> = EntityStore::get(&state.pool, &id).await?;

    let Some(model) = model else {
        return Ok((
            StatusCode::NOT_FOUND,
            Html("<!DOCTYPE html><title>Not found</title><p>Model not found.</p>".to_string()),
        )
            .into_response());
    };

    let template = templates()
        .get_template("embed.html")
        .map_err(|e| AppError::Internal(format!("Template lookup failed: {e}")))?;

    let html = template
        .render(context! {
            title => model.title,
            url => model.url,
            poster_url => model.poster_url,
            config => Value::from_serialize(&model.config),
        })
        .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))?;

    Ok(Html(html).into_response())
}
