//! Foundation types for LayerMerge.
//!
//! A record is overridden by several priority-ordered sources. This crate
//! models the pieces every other LayerMerge crate passes around: the
//! identities, one source's version of a record, the ordered override chain,
//! the leaf subset of that chain, and the merged output.
//!
//! # Key Types
//!
//! - [`RecordKey`] -- Stable record identity shared by all variants
//! - [`SourceId`] -- Identity of a priority-ordered contributor
//! - [`TrackRef`] -- Opaque element of a record's ordered track list
//! - [`Variant`] -- One source's snapshot of a record
//! - [`Chain`] -- Contributions ordered origin first, most specific last
//! - [`Extent`] -- Index subset of a chain holding the undominated overrides
//! - [`MergedRecord`] -- The single merged result

pub mod chain;
pub mod error;
pub mod identity;
pub mod record;

pub use chain::{Chain, Contribution, Extent};
pub use error::TypeError;
pub use identity::{RecordKey, SourceId, TrackRef};
pub use record::{MergedRecord, MusicFlags, Variant};
