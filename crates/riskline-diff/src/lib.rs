//! Diff engine for Riskline snapshots.
//!
//! Computes per-tier added/removed leaf sets between two snapshots by
//! identity-key set difference, and derives order-insensitive content
//! equality from it. All functions are total over well-formed snapshots;
//! there are no error paths.
//!
//! # Key Types
//!
//! - [`SnapshotDiff`] -- Per-tier changes between a before and an after
//!   snapshot
//! - [`TierChanges`] -- Added and removed areas for one tier

pub mod snapshot_diff;

pub use snapshot_diff::{diff_snapshots, same_content, SnapshotDiff, TierChanges};
