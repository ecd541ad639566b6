//! Report summaries for Riskline.
//!
//! Pure formatting over snapshot and diff outputs: a timestamp line, then
//! one line per tier with nationwide and per-province counts, plus
//! increase/decrease clauses when a diff is supplied. No independent state.

pub mod summary;

pub use summary::summary_lines;
