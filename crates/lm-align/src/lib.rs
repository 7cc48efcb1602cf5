//! Sequence alignment for LayerMerge.
//!
//! Pairs up the elements of two ordered sequences so the merger can tell
//! kept, inserted, removed and substituted elements apart.
//!
//! # Key Types
//!
//! - [`Slot`] -- one step of an alignment: left only, right only, or a pair
//! - [`Scoring`] -- match reward and gap penalty
//! - [`AlignMode`] -- [`Global`](AlignMode::Global) (Needleman-Wunsch) or
//!   [`Extended`](AlignMode::Extended) (best local region, stretched to cover
//!   both sequences)
//!
//! Both algorithms break traceback ties the same way: diagonal first, then
//! vertical (consume left only), then horizontal (consume right only).
//! Merges are only reproducible if that order holds.

pub mod error;
pub mod extended;
pub mod global;
pub mod scoring;
pub mod slot;

mod table;

pub use error::{AlignError, AlignResult};
pub use extended::align_extended;
pub use global::align_global;
pub use scoring::{AlignMode, Scoring};
pub use slot::Slot;

/// Align `left` against `right` with the algorithm selected by `mode`.
pub fn align<'a, T: PartialEq>(
    left: &'a [T],
    right: &'a [T],
    scoring: Scoring,
    mode: AlignMode,
) -> Vec<Slot<'a, T>> {
    match mode {
        AlignMode::Global => align_global(left, right, scoring),
        AlignMode::Extended => align_extended(left, right, scoring),
    }
}
