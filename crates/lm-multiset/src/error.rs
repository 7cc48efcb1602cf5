//! Error types for the multiset crate.

/// Errors that can occur during multiset operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MultisetError {
    /// The primary operand of an operation was absent. Only the secondary
    /// operand may be omitted (it reads as empty).
    #[error("invalid argument: primary operand `{operand}` is absent")]
    InvalidArgument { operand: &'static str },
}

/// Convenience alias for multiset results.
pub type MultisetResult<T> = Result<T, MultisetError>;
