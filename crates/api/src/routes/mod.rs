pub mod auth;
pub mod embed;
pub mod health;
pub mod models;
pub mod settings;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login          POST          login (public, mock credentials)
/// /models              GET, POST     list / create (auth)
/// /models/{id}         GET, PATCH, DELETE (auth)
/// /viewer/{id}         GET           public model read for embeds
/// /users               GET, POST     list / create (auth)
/// /settings            GET, PATCH    singleton (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(models::router())
        .merge(users::router())
        .merge(settings::router())
}
