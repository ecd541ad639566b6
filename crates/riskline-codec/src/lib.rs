//! Dictionary codec for Riskline snapshots.
//!
//! Place names repeat heavily across snapshots (every address in one city
//! shares its province, city, and often region strings). For storage and
//! interchange, each area is reduced to a 4-tuple of integer indices into a
//! shared string dictionary built in first-seen order.
//!
//! The compressed shape is the only stable persisted format Riskline
//! defines: tuple field order `[province, city, region, address]`, the
//! dictionary a flat ordered string array, tiers always present (possibly
//! empty).
//!
//! # Key Types
//!
//! - [`CompressedBatch`] -- A snapshot collection sharing one dictionary
//! - [`CompressedSnapshot`] -- One snapshot as index tuples; carries its own
//!   dictionary when compressed standalone
//! - [`DictBuilder`] -- First-seen-order string interner
//! - [`CodecError`] -- Decompression failure (out-of-range index)

pub mod compress;
pub mod compressed;
pub mod decompress;
pub mod dict;
pub mod error;

pub use compress::{compress, compress_one};
pub use compressed::{CompressedArea, CompressedBatch, CompressedSnapshot};
pub use decompress::{decompress, decompress_one};
pub use dict::DictBuilder;
pub use error::{CodecError, CodecResult};
