use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meshdeck_api::config::ServerConfig;
use meshdeck_api::router::build_app_router;
use meshdeck_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meshdeck_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Entity store ---
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:meshdeck.db".into());

    let pool = meshdeck_db::create_pool(&database_url)
        .await
        .expect("Failed to open entity store");
    tracing::info!(url = %database_url, "Entity store pool created");

    meshdeck_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations applied");

    meshdeck_db::health_check(&pool)
        .await
        .expect("Entity store health check failed");

    // --- Router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
