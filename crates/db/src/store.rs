//! Generic typed access to the `entities` table.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::DbPool;

/// A record type that can be persisted in the entity store.
///
/// `KIND` namespaces the rows; `key` is the per-record identity within the
/// kind. `seed` supplies the records [`EntityStore::ensure_seed`] installs
/// into an empty store.
pub trait EntityKind: Serialize + DeserializeOwned + Send + Sync + Unpin {
    const KIND: &'static str;

    fn key(&self) -> String;

    fn seed() -> Vec<Self>
    where
        Self: Sized,
    {
        Vec::new()
    }
}

/// Typed CRUD over JSON documents keyed by `(kind, key)`.
///
/// All writes are last-write-wins; there is no optimistic concurrency token,
/// so concurrent mutations of the same key race at the storage layer.
pub struct EntityStore;

impl EntityStore {
    /// Fetch a single record, `None` if absent.
    pub async fn get<T: EntityKind>(pool: &DbPool, key: &str) -> Result<Option<T>, StoreError> {
        let row: Option<String> =
            sqlx::query_scalar("SELECT value FROM entities WHERE kind = ? AND key = ?")
                .bind(T::KIND)
                .bind(key)
                .fetch_optional(pool)
                .await?;

        match row {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    /// Whether a record with this key exists.
    pub async fn exists<T: EntityKind>(pool: &DbPool, key: &str) -> Result<bool, StoreError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM entities WHERE kind = ? AND key = ?")
                .bind(T::KIND)
                .bind(key)
                .fetch_one(pool)
                .await?;
        Ok(count > 0)
    }

    /// Insert or replace a record under its own key.
    pub async fn put<T: EntityKind>(pool: &DbPool, record: &T) -> Result<(), StoreError> {
        let value = serde_json::to_string(record)?;
        sqlx::query(
            "INSERT INTO entities (kind, key, value) VALUES (?, ?, ?) \
             ON CONFLICT (kind, key) DO UPDATE SET value = excluded.value",
        )
        .bind(T::KIND)
        .bind(record.key())
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Persist a freshly built record and hand it back.
    pub async fn create<T: EntityKind>(pool: &DbPool, record: T) -> Result<T, StoreError> {
        Self::put(pool, &record).await?;
        Ok(record)
    }

    /// Read-modify-write a record. Returns `None` (and writes nothing) when
    /// the key is absent.
    pub async fn mutate<T, F>(pool: &DbPool, key: &str, f: F) -> Result<Option<T>, StoreError>
    where
        T: EntityKind,
        F: FnOnce(&mut T),
    {
        let Some(mut record) = Self::get::<T>(pool, key).await? else {
            return Ok(None);
        };
        f(&mut record);
        Self::put(pool, &record).await?;
        Ok(Some(record))
    }

    /// Delete a record. Returns whether a row was actually removed; deleting
    /// a nonexistent key is not an error.
    pub async fn delete<T: EntityKind>(pool: &DbPool, key: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM entities WHERE kind = ? AND key = ?")
            .bind(T::KIND)
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All records of a kind, in insertion order. Domain-specific ordering
    /// (e.g. newest-first for models) is applied by callers.
    pub async fn list<T: EntityKind>(pool: &DbPool) -> Result<Vec<T>, StoreError> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT value FROM entities WHERE kind = ? ORDER BY rowid")
                .bind(T::KIND)
                .fetch_all(pool)
                .await?;

        rows.iter()
            .map(|value| serde_json::from_str(value).map_err(StoreError::from))
            .collect()
    }

    /// Number of records of a kind.
    pub async fn count<T: EntityKind>(pool: &DbPool) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entities WHERE kind = ?")
            .bind(T::KIND)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Install `T::seed()` if and only if the store holds no record of this
    /// kind. Safe to call on every request: repeat calls are no-ops, and the
    /// upsert write path keeps a concurrent double-seed harmless.
    pub async fn ensure_seed<T: EntityKind>(pool: &DbPool) -> Result<(), StoreError> {
        if Self::count::<T>(pool).await? > 0 {
            return Ok(());
        }

        let records = T::seed();
        if records.is_empty() {
            return Ok(());
        }

        tracing::info!(kind = T::KIND, count = records.len(), "Seeding entity store");
        for record in &records {
            Self::put(pool, record).await?;
        }
        Ok(())
    }
}
