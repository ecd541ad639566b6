//! Ingest orchestration for Riskline.
//!
//! One cycle per scheduled fetch: read the newest stored snapshots and the
//! upstream feed concurrently, persist the fetched snapshot only when it is
//! a new upstream event, expire stale records, and hand back a bounded
//! most-recent-first window.
//!
//! The cycle is the only concurrent part of the system; everything it calls
//! is a pure transformation or a collaborator behind a trait.
//!
//! # Key Types
//!
//! - [`Ingestor`] -- Runs the per-cycle persistence decision
//! - [`IngestConfig`] -- Window size and retention horizon
//! - [`SourceFeed`] -- The upstream feed boundary
//! - [`IngestError`] -- Feed and store failures, surfaced unchanged

pub mod config;
pub mod cycle;
pub mod error;
pub mod feed;

pub use config::IngestConfig;
pub use cycle::{dedup_by_event, retention_cutoff, Ingestor};
pub use error::{IngestError, IngestResult};
pub use feed::{FeedError, SourceFeed};
