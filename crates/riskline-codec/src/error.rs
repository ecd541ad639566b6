use thiserror::Error;

/// Errors from codec operations.
///
/// Compression is total; only decompression can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A tuple referenced an index beyond the dictionary. Signals corrupted
    /// storage or a mismatched dictionary/data pairing; never substituted
    /// with an empty string.
    #[error("dictionary index out of range: {index} >= {dict_len}")]
    IndexOutOfRange { index: u32, dict_len: usize },
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
