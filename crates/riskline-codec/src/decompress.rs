use riskline_types::{Area, Snapshot};

use crate::compressed::{CompressedArea, CompressedBatch, CompressedSnapshot};
use crate::error::{CodecError, CodecResult};

/// Decompress a batch against its shared dictionary.
///
/// Fails with [`CodecError::IndexOutOfRange`] on the first tuple index that
/// is not a valid offset into the dictionary.
pub fn decompress(batch: &CompressedBatch) -> CodecResult<Vec<Snapshot>> {
    batch
        .data
        .iter()
        .map(|record| decompress_snapshot(record, &batch.dict))
        .collect()
}

/// Decompress a standalone record against its embedded dictionary.
pub fn decompress_one(record: &CompressedSnapshot) -> CodecResult<Snapshot> {
    decompress_snapshot(record, &record.dict)
}

fn decompress_snapshot(record: &CompressedSnapshot, dict: &[String]) -> CodecResult<Snapshot> {
    Ok(Snapshot {
        high: decompress_areas(&record.high, dict)?,
        middle: decompress_areas(&record.middle, dict)?,
        low: decompress_areas(&record.low, dict)?,
        create: record.create,
        since: record.since,
    })
}

fn decompress_areas(tuples: &[CompressedArea], dict: &[String]) -> CodecResult<Vec<Area>> {
    tuples
        .iter()
        .map(|&[province, city, region, address]| {
            Ok(Area {
                province: lookup(dict, province)?,
                city: lookup(dict, city)?,
                region: lookup(dict, region)?,
                address: lookup(dict, address)?,
            })
        })
        .collect()
}

fn lookup(dict: &[String], index: u32) -> CodecResult<String> {
    dict.get(index as usize)
        .cloned()
        .ok_or(CodecError::IndexOutOfRange {
            index,
            dict_len: dict.len(),
        })
}
