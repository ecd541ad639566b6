//! Snapshot storage boundary for Riskline.
//!
//! The core pipeline never talks to a database directly; it goes through the
//! [`SnapshotStore`] trait, keyed exclusively by the two snapshot timestamps
//! (`since` for upserts, `create` for recency and retention). Backends are
//! external collaborators; this crate ships the in-memory reference
//! implementation used by tests and embedders.
//!
//! # Key Types
//!
//! - [`SnapshotStore`] -- The persistence trait (find / upsert / expire)
//! - [`InMemorySnapshotStore`] -- `Vec`-backed store behind a `RwLock`
//! - [`StoreError`] -- Persistence failures, surfaced unchanged to callers

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemorySnapshotStore;
pub use traits::SnapshotStore;
