//! Error taxonomy.
//!
//! Each subsystem owns a `thiserror` enum; `MitraError` wraps them all so
//! callers propagate with `?` across crate boundaries.

mod chain_error;
mod prediction_error;
mod storage_error;

pub use chain_error::ChainError;
pub use prediction_error::PredictionError;
pub use storage_error::StorageError;

/// Result alias used throughout the workspace.
pub type MitraResult<T> = Result<T, MitraError>;

/// Top-level error for every Mitra operation.
#[derive(Debug, thiserror::Error)]
pub enum MitraError {
    #[error("prediction error: {0}")]
    PredictionError(#[from] PredictionError),

    #[error("chain error: {0}")]
    ChainError(#[from] ChainError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

impl MitraError {
    /// Whether this error belongs to the transient invocation taxonomy
    /// (model faults, rate limits, query execution failures).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            MitraError::ChainError(_) | MitraError::StorageError(StorageError::SqliteError { .. })
        )
    }
}
