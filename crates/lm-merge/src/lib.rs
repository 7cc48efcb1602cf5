//! Record merger for LayerMerge.
//!
//! Folds a priority-ordered override chain into one record. Scalar fields
//! take the value of the most specific extent override that changed them.
//! The track list is merged in two phases:
//!
//! 1. **Candidate order** -- the whole chain is folded pairwise with the
//!    global aligner, keeping everything that was ever present.
//! 2. **Authoritative content** -- the tracks common to every extent leaf
//!    plus each leaf's exclusive tracks.
//!
//! When the authoritative content is shorter than the candidate, it is
//! reconciled against the candidate with the extended aligner.
//!
//! # Key Types
//!
//! - [`MergeConfig`] -- scoring, defaults and the [`AbsentPolicy`]
//! - [`merge_record`] -- merge one chain given its extent
//! - [`plan_patch`] / [`PatchSet`] -- merge every record a [`ChainProvider`]
//!   exposes that has more than one leaf override

pub mod config;
pub mod error;
pub mod merger;
pub mod patch;
pub mod scalars;
pub mod tracks;

pub use config::{AbsentPolicy, MergeConfig};
pub use error::{MergeError, MergeResult};
pub use merger::{merge_chain, merge_record};
pub use patch::{plan_patch, ChainProvider, PatchSet};
pub use scalars::{resolve_scalars, ScalarFields};
pub use tracks::{authoritative_tracks, candidate_order, reconcile};
