//! Handler for `POST /api/auth/login`.
//!
//! Credentials are the single configured pair and the issued token is the
//! configured static string — a demo mock kept deliberately simple. See
//! [`AuthConfig`](crate::config::AuthConfig).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use meshdeck_core::user::{Role, User};
use meshdeck_db::EntityStore;

use crate::error::{AppError, AppResult};
use crate::handlers::require_str;
use crate::response::Envelope;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /api/auth/login
///
/// Wrong credentials are a 400-class failure envelope: the client treats it
/// the same as any other validation failure and never stores auth state.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<Envelope<LoginResponse>>> {
    let username = require_str(input.username.as_deref(), "username")?;
    let password = require_str(input.password.as_deref(), "password")?;

    let auth = &state.config.auth;
    if username != auth.admin_username || password != auth.admin_password {
        return Err(AppError::BadRequest("Invalid username or password".into()));
    }

    // Prefer the seeded admin record so the client sees the same user the
    // user list shows; fall back to a synthetic admin if it was deleted.
    let user = EntityStore::get(&state.pool, "u1")
        .await?
        .unwrap_or_else(|| User {
            id: "u1".to_string(),
            name: "Admin User".to_string(),
            email: format!("{}@meshdeck.io", auth.admin_username),
            role: Role::Admin,
            avatar_url: None,
        });

    tracing::info!(username = %username, "Admin logged in");
    Ok(Json(Envelope::ok(LoginResponse {
        token: auth.api_token.clone(),
        user,
    })))
}
