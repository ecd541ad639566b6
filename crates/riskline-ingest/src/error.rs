use thiserror::Error;

use riskline_store::StoreError;

use crate::feed::FeedError;

/// Errors from an ingest cycle.
///
/// Both variants wrap collaborator failures unchanged; the cycle itself has
/// no failure modes of its own and performs no internal retries.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;
