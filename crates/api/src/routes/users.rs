use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// `GET /users`, `POST /users`.
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(users::list_users).post(users::create_user))
}
