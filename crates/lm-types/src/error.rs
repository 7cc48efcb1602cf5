use thiserror::Error;

use crate::identity::RecordKey;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("variant for {actual} cannot join the chain of {expected}")]
    KeyMismatch { expected: RecordKey, actual: RecordKey },
}
