use std::sync::RwLock;

use async_trait::async_trait;

use riskline_types::{Snapshot, TimestampMs};

use crate::error::StoreResult;
use crate::traits::SnapshotStore;

/// In-memory, `Vec`-backed snapshot store.
///
/// Intended for tests and embedding. Records are held behind a `RwLock` and
/// cloned on read; ordering guarantees come from sorting at query time, not
/// from insertion order.
pub struct InMemorySnapshotStore {
    records: RwLock<Vec<Snapshot>>,
}

impl InMemorySnapshotStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn find_recent(&self, limit: usize) -> StoreResult<Vec<Snapshot>> {
        let records = self.records.read().expect("lock poisoned");
        let mut recent: Vec<Snapshot> = records.clone();
        recent.sort_by(|a, b| b.create.cmp(&a.create));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn upsert_by_event(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let mut records = self.records.write().expect("lock poisoned");
        match records.iter_mut().find(|r| r.since == snapshot.since) {
            Some(existing) => *existing = snapshot.clone(),
            None => records.push(snapshot.clone()),
        }
        Ok(())
    }

    async fn delete_created_before(&self, cutoff: TimestampMs) -> StoreResult<usize> {
        let mut records = self.records.write().expect("lock poisoned");
        let before = records.len();
        records.retain(|r| r.create >= cutoff);
        let deleted = before - records.len();
        if deleted > 0 {
            tracing::debug!(deleted, cutoff, "expired stored snapshots");
        }
        Ok(deleted)
    }
}

impl std::fmt::Debug for InMemorySnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySnapshotStore")
            .field("record_count", &self.len())
            .finish()
    }
}
