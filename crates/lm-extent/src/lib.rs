//! Extent resolution for LayerMerge.
//!
//! Sources declare the sources they depend on (their masters). When several
//! sources override the same record, an override made by a master is already
//! accounted for by its dependents. The *extent* is what is left: the
//! overrides whose source is not a master of any other contributing source.
//!
//! The dependency graph is an adjacency lookup ([`MasterLookup`]) keyed by
//! [`SourceId`](lm_types::SourceId), never a graph of live references.

pub mod graph;
pub mod resolver;

pub use graph::{MasterGraph, MasterLookup};
pub use resolver::{has_multiple_overrides, resolve_extent};
