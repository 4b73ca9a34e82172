//! Error types for numlet

use thiserror::Error;

/// Errors raised by array construction, indexing and sampling
#[derive(Debug, Error)]
pub enum ArrayError {
    /// Construction input was a scalar, not a collection
    #[error("input must be a list or an object, got {0}")]
    InvalidInput(&'static str),

    /// Position outside `[0, len)`
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// String key with neither `,` nor `:`
    #[error("unsupported index key: {0:?}")]
    UnsupportedIndex(String),

    /// Key has a delimiter but does not parse
    #[error("malformed index key {key:?}: {reason}")]
    MalformedIndex { key: String, reason: String },

    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    /// Product of the requested sizes differs from the element count
    #[error("cannot reshape array of size {size} into shape {shape:?}")]
    ReshapeSizeMismatch { size: usize, shape: Vec<usize> },

    #[error("cannot split into {0} parts")]
    InvalidSplit(usize),

    /// Read past the last item of an iterator
    #[error("iterator exhausted at position {position} (length {len})")]
    IteratorExhausted { position: usize, len: usize },

    #[error("unknown dtype: {0:?}")]
    UnknownDType(String),

    /// Inclusive range with `low > high`
    #[error("empty range: low {low} is greater than high {high}")]
    EmptyRange { low: i64, high: i64 },

    #[error("cannot choose from an empty collection")]
    EmptyCollection,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArrayError>;
