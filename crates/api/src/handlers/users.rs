//! Handlers for the `/api/users` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use meshdeck_core::user::{CreateUser, Role, User};
use meshdeck_db::EntityStore;

use crate::auth::AuthToken;
use crate::error::AppResult;
use crate::handlers::require_str;
use crate::response::Envelope;
use crate::state::AppState;

/// Raw request body for `POST /api/users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar_url: Option<String>,
}

/// GET /api/users
pub async fn list_users(
    _auth: AuthToken,
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<User>>>> {
    let users: Vec<User> = EntityStore::list(&state.pool).await?;
    Ok(Json(Envelope::ok(users)))
}

/// POST /api/users
pub async fn create_user(
    _auth: AuthToken,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<Json<Envelope<User>>> {
    let name = require_str(input.name.as_deref(), "name")?;
    let email = require_str(input.email.as_deref(), "email")?;

    let user = User::new(CreateUser {
        name,
        email,
        role: input.role,
        avatar_url: input.avatar_url,
    });

    let created = EntityStore::create(&state.pool, user).await?;
    tracing::info!(user_id = %created.id, "User created");
    Ok(Json(Envelope::ok(created)))
}
