//! Error types for the merge crate.

use lm_types::RecordKey;

/// Errors that can occur while merging.
///
/// Every variant except the configuration errors is a caller precondition
/// violation: the inputs were malformed and no partial merge was produced.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The chain to merge had no contributions.
    #[error("cannot merge {key}: chain is empty")]
    EmptyChain { key: RecordKey },

    /// The extent selected no contributions.
    #[error("cannot merge {key}: extent is empty")]
    EmptyExtent { key: RecordKey },

    /// The extent was resolved for a different record.
    #[error("extent of {extent} does not belong to the chain of {chain}")]
    ExtentKeyMismatch { chain: RecordKey, extent: RecordKey },

    /// An extent index does not address a chain entry.
    #[error("extent index {index} is outside the chain of {key} ({len} entries)")]
    ExtentIndexOutOfRange {
        key: RecordKey,
        index: usize,
        len: usize,
    },

    /// Extent indices must be strictly ascending.
    #[error("extent of {key} is not in chain order: {index} follows {previous}")]
    ExtentNotAscending {
        key: RecordKey,
        previous: usize,
        index: usize,
    },

    /// A configured scoring is unusable.
    #[error("invalid merge config: {0}")]
    InvalidScoring(#[from] lm_align::AlignError),

    /// The configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl MergeError {
    /// Returns `true` if the error reports malformed merge inputs.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, Self::InvalidScoring(_) | Self::ConfigParse(_))
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
