//! Meshdeck entity store.
//!
//! A generic key-value record store over SQLite: every persisted record is a
//! JSON document in a single `entities` table, addressed by `(kind, key)`.
//! [`EntityStore`] provides the typed access contract; [`entities`] binds the
//! domain types (and their seed data) to storage kinds.

pub mod entities;
pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{EntityKind, EntityStore};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection pool shared by all store operations.
pub type DbPool = SqlitePool;

/// Create a connection pool for the given SQLite URL.
///
/// `create_if_missing` is set so a fresh deployment bootstraps itself from
/// an empty file.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Apply pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Cheap connectivity probe used by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
