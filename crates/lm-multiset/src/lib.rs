//! Multiset algebra for LayerMerge.
//!
//! Sequences are treated as multisets (repetition counts matter) while the
//! output keeps the order of one operand. These are the primitives the
//! record merger uses to decide which track occurrences survive.
//!
//! - [`intersect`] -- occurrences common to both sides, `min` of the counts
//! - [`without`] -- left side minus right side, left order preserved
//! - [`multiset_eq`] -- equality ignoring order

pub mod algebra;
pub mod error;

pub use algebra::{intersect, multiset_eq, try_intersect, try_without, without};
pub use error::{MultisetError, MultisetResult};
