//! Lazy seed middleware.
//!
//! The backing store starts empty on a fresh deployment; the first request
//! that reaches the API populates the demo records. `ensure_seed` is
//! idempotent per kind, so running this on every request is a cheap count
//! query once seeded.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use meshdeck_core::model::Model3D;
use meshdeck_core::settings::Settings;
use meshdeck_core::user::User;
use meshdeck_db::{DbPool, EntityStore, StoreError};

use crate::error::AppError;
use crate::state::AppState;

/// Seed every record kind that ships demo data.
pub async fn seed_all(pool: &DbPool) -> Result<(), StoreError> {
    EntityStore::ensure_seed::<Model3D>(pool).await?;
    EntityStore::ensure_seed::<User>(pool).await?;
    EntityStore::ensure_seed::<Settings>(pool).await?;
    Ok(())
}

/// Axum middleware: ensure seed data exists before the handler runs.
pub async fn ensure_seeded(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(err) = seed_all(&state.pool).await {
        return AppError::Store(err).into_response();
    }
    next.run(request).await
}
