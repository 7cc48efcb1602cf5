//! Error types for the alignment crate.

/// Errors that can occur when configuring an alignment.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// Match score must be positive and gap score negative.
    #[error("invalid scoring: match {match_score} must be > 0 and gap {gap_score} must be < 0")]
    InvalidScoring { match_score: i32, gap_score: i32 },
}

/// Convenience alias for alignment results.
pub type AlignResult<T> = Result<T, AlignError>;
