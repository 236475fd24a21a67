use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// `GET /settings`, `PATCH /settings` (singleton).
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(settings::get_settings).patch(settings::update_settings),
    )
}
