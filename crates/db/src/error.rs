/// Errors surfaced by the entity store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored JSON document failed to (de)serialize against its record
    /// type. Indicates a schema drift or a corrupted row.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
