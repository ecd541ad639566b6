use serde::{Deserialize, Serialize};

/// Configuration for the ingest cycle.
///
/// Constructed explicitly and passed to [`Ingestor`](crate::Ingestor) at
/// startup; there is no ambient global configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Maximum number of snapshots returned per cycle, most recent first.
    pub window_size: usize,
    /// Expiry horizon in whole days. Stored snapshots created before the
    /// start of the current UTC day minus this horizon are deleted.
    pub retention_days: i64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            retention_days: 3,
        }
    }
}
