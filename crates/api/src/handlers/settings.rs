//! Handlers for the `/api/settings` singleton.

use axum::extract::State;
use axum::Json;

use meshdeck_core::settings::{Settings, SettingsUpdate};
use meshdeck_db::EntityStore;

use crate::auth::AuthToken;
use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/settings
///
/// The singleton is seeded lazily; fall back to defaults if a read races
/// a fresh deployment anyway.
pub async fn get_settings(
    _auth: AuthToken,
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Settings>>> {
    let settings = EntityStore::get(&state.pool, Settings::GLOBAL_KEY)
        .await?
        .unwrap_or_default();
    Ok(Json(Envelope::ok(settings)))
}

/// PATCH /api/settings — shallow-merge update of the singleton.
pub async fn update_settings(
    _auth: AuthToken,
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> AppResult<Json<Envelope<Settings>>> {
    let mut settings: Settings = EntityStore::get(&state.pool, Settings::GLOBAL_KEY)
        .await?
        .unwrap_or_default();
    update.apply(&mut settings);
    EntityStore::put(&state.pool, &settings).await?;

    tracing::info!(theme = %settings.theme, "Settings updated");
    Ok(Json(Envelope::ok(settings)))
}
