/// Record identifiers are PostgreSQL BIGSERIAL, references included.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
