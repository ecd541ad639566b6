use thiserror::Error;

/// Errors from snapshot store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed or is unreachable.
    #[error("backend error: {0}")]
    Backend(String),

    /// A stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
