//! Foundation types for Riskline.
//!
//! This crate provides the core data model shared by every other Riskline
//! crate: the leaf risk-area record, the risk tiers, the snapshot taken per
//! fetch cycle, and the merged-cell table unit.
//!
//! # Key Types
//!
//! - [`Area`] — One leaf record in the province → city → region → address
//!   hierarchy, with its concatenation identity key
//! - [`AreaLevel`] — The four hierarchy levels, outermost first
//! - [`Tier`] — Risk tier (high / middle / low)
//! - [`Snapshot`] — All areas of one fetch, with business and ingestion
//!   timestamps
//! - [`Cell`] — A table-rendering unit carrying rowspan/colspan merge
//!   metadata

pub mod area;
pub mod cell;
pub mod snapshot;

pub use area::{Area, AreaLevel};
pub use cell::Cell;
pub use snapshot::{Snapshot, Tier, TimestampMs};
