//! File-backed host for LayerMerge.
//!
//! A [`LoadOrder`] lists every source in ascending priority together with
//! its masters and the record variants it authors. It answers both host
//! queries the merger needs: chains per record ([`ChainProvider`]) and
//! master sets per source ([`MasterLookup`]). Disabled sources keep their
//! place in the order but contribute nothing.
//!
//! Load orders and patches are TOML or JSON documents; the format follows
//! the file extension.
//!
//! [`ChainProvider`]: lm_merge::ChainProvider
//! [`MasterLookup`]: lm_extent::MasterLookup

pub mod error;
pub mod format;
pub mod load_order;
pub mod patch_file;

pub use error::{StoreError, StoreResult};
pub use format::FileFormat;
pub use load_order::{LoadOrder, SourceEntry};
pub use patch_file::{load_patch, save_patch};
