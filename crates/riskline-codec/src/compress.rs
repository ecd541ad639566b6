use riskline_types::{Area, Snapshot};

use crate::compressed::{CompressedArea, CompressedBatch, CompressedSnapshot};
use crate::dict::DictBuilder;

/// Compress a snapshot list against one shared dictionary.
///
/// Scans every area field in input order, tier order (high, middle, low),
/// and field order (province, city, region, address). Index assignment is
/// deterministic given a fixed input order, and the resulting dictionary is
/// minimal: no duplicate and no unused entries.
pub fn compress(snapshots: &[Snapshot]) -> CompressedBatch {
    let mut dict = DictBuilder::new();
    let data = snapshots
        .iter()
        .map(|snapshot| compress_snapshot(snapshot, &mut dict))
        .collect();
    CompressedBatch {
        dict: dict.into_entries(),
        data,
    }
}

/// Compress a single snapshot, embedding its dictionary in the record.
pub fn compress_one(snapshot: &Snapshot) -> CompressedSnapshot {
    let mut dict = DictBuilder::new();
    let mut record = compress_snapshot(snapshot, &mut dict);
    record.dict = dict.into_entries();
    record
}

fn compress_snapshot(snapshot: &Snapshot, dict: &mut DictBuilder) -> CompressedSnapshot {
    CompressedSnapshot {
        high: compress_areas(&snapshot.high, dict),
        middle: compress_areas(&snapshot.middle, dict),
        low: compress_areas(&snapshot.low, dict),
        create: snapshot.create,
        since: snapshot.since,
        dict: Vec::new(),
    }
}

fn compress_areas(areas: &[Area], dict: &mut DictBuilder) -> Vec<CompressedArea> {
    areas
        .iter()
        .map(|area| {
            [
                dict.intern(&area.province),
                dict.intern(&area.city),
                dict.intern(&area.region),
                dict.intern(&area.address),
            ]
        })
        .collect()
}
