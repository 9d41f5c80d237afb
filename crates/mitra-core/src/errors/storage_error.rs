/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("failed to load table {table}: {reason}")]
    TableLoadFailed { table: String, reason: String },

    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },
}
