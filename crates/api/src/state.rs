use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Entity store connection pool.
    pub pool: meshdeck_db::DbPool,
    /// Server configuration (auth credentials, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
