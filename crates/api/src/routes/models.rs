//! Route definitions for the model resource.
//!
//! ```text
//! GET    /models          -> list_models
//! POST   /models          -> create_model
//! GET    /models/{id}     -> get_model
//! PATCH  /models/{id}     -> update_model
//! DELETE /models/{id}     -> delete_model
//! GET    /viewer/{id}     -> viewer_model (public)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::models;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/models",
            get(models::list_models).post(models::create_model),
        )
        .route(
            "/models/{id}",
            get(models::get_model)
                .patch(models::update_model)
                .delete(models::delete_model),
        )
        .route("/viewer/{id}", get(models::viewer_model))
}
