use async_trait::async_trait;
use thiserror::Error;

use riskline_types::Snapshot;

/// A source feed failure: upstream unreachable or unparsable.
///
/// Opaque to the core; the message is whatever the feed implementation
/// reports.
#[derive(Debug, Error)]
#[error("source feed failure: {0}")]
pub struct FeedError(pub String);

/// The upstream risk-area feed.
///
/// Implementations fetch the current hierarchical feed and parse it into
/// the [`Snapshot`] shape, setting `create` to the ingestion wall clock and
/// `since` to the business timestamp parsed from the feed's free-text data
/// time. Failures propagate unchanged; the core never retries.
#[async_trait]
pub trait SourceFeed: Send + Sync {
    async fn fetch_latest(&self) -> Result<Snapshot, FeedError>;
}
