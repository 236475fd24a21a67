/// Entity records are keyed by opaque strings (UUIDs for created records,
/// fixed keys for seeds and singletons).
pub type EntityKey = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
