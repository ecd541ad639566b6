use serde::{Deserialize, Serialize};

use riskline_types::TimestampMs;

/// One area as dictionary indices, in field order
/// `[province, city, region, address]`.
pub type CompressedArea = [u32; 4];

/// A snapshot with every area replaced by index tuples.
///
/// `dict` is populated only when the record was compressed standalone via
/// [`compress_one`](crate::compress_one); inside a [`CompressedBatch`] it is
/// empty and the batch dictionary governs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedSnapshot {
    pub high: Vec<CompressedArea>,
    pub middle: Vec<CompressedArea>,
    pub low: Vec<CompressedArea>,
    pub create: TimestampMs,
    pub since: TimestampMs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dict: Vec<String>,
}

/// A snapshot collection compressed against one shared dictionary.
///
/// Invariants: every index in every tuple is a valid offset into `dict`;
/// `dict` holds each distinct string exactly once, at the index its first
/// occurrence was assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedBatch {
    pub dict: Vec<String>,
    pub data: Vec<CompressedSnapshot>,
}
