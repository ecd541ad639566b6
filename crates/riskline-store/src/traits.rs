use async_trait::async_trait;

use riskline_types::{Snapshot, TimestampMs};

use crate::error::StoreResult;

/// Snapshot persistence boundary.
///
/// All implementations must satisfy these invariants:
/// - Records are keyed by `since`: writing a snapshot whose `since` already
///   exists replaces that record, so re-persisting the same upstream event
///   is idempotent.
/// - `find_recent` orders by `create` descending (newest ingestion first).
/// - Retention cuts on `create`, never on `since`: `delete_created_before`
///   must not consider the business timestamp.
/// - The store never queries by any other key.
/// - All I/O errors are propagated, never silently ignored.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The most recently ingested snapshots, newest `create` first, at most
    /// `limit` of them.
    async fn find_recent(&self, limit: usize) -> StoreResult<Vec<Snapshot>>;

    /// Insert the snapshot, replacing any record with the same `since`.
    async fn upsert_by_event(&self, snapshot: &Snapshot) -> StoreResult<()>;

    /// Bulk-delete every record with `create < cutoff`. Returns the number
    /// of records deleted.
    async fn delete_created_before(&self, cutoff: TimestampMs) -> StoreResult<usize>;
}

#[async_trait]
impl<T: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<T> {
    async fn find_recent(&self, limit: usize) -> StoreResult<Vec<Snapshot>> {
        (**self).find_recent(limit).await
    }

    async fn upsert_by_event(&self, snapshot: &Snapshot) -> StoreResult<()> {
        (**self).upsert_by_event(snapshot).await
    }

    async fn delete_created_before(&self, cutoff: TimestampMs) -> StoreResult<usize> {
        (**self).delete_created_before(cutoff).await
    }
}
