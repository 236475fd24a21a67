use axum::routing::get;
use axum::Router;

use crate::handlers::embed;
use crate::state::AppState;

/// `GET /embed/{id}` — the public iframe surface (root level, not `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/embed/{id}", get(embed::embed_page))
}
