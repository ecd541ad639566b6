//! Hierarchical table builder for Riskline.
//!
//! Turns a flat area list into a row-major grid of [`Cell`]s representing a
//! 4-column merged table (province, city, region, address), one row per leaf
//! address, and merges the per-tier grids into one row set with a leading
//! tier-label column.
//!
//! Renderers consume the grid as-is: `rowspan`/`colspan`/`render` describe
//! the merge geometry exactly, and `fresh` marks leaves newly added relative
//! to a reference diff.
//!
//! # Key Types
//!
//! - [`RiskTable`] -- The three per-tier grids for one snapshot
//! - [`tier_rows`] -- Grid construction for a single tier
//!
//! [`Cell`]: riskline_types::Cell

pub mod builder;
pub mod table;

pub use builder::tier_rows;
pub use table::RiskTable;
