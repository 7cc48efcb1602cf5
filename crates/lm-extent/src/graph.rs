//! Source dependency lookup.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use lm_types::SourceId;

/// Host-supplied lookup from a source to its declared masters.
///
/// A source the host does not know has no masters.
pub trait MasterLookup {
    /// The declared masters of `source`.
    fn masters(&self, source: &SourceId) -> BTreeSet<SourceId>;
}

impl<L: MasterLookup + ?Sized> MasterLookup for &L {
    fn masters(&self, source: &SourceId) -> BTreeSet<SourceId> {
        (**self).masters(source)
    }
}

/// Adjacency-map dependency graph: source -> declared masters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterGraph {
    edges: BTreeMap<SourceId, BTreeSet<SourceId>>,
}

impl MasterGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `source` with the given masters, replacing any earlier
    /// declaration.
    pub fn insert<I>(&mut self, source: SourceId, masters: I)
    where
        I: IntoIterator<Item = SourceId>,
    {
        self.edges.insert(source, masters.into_iter().collect());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_source<I, M>(mut self, source: impl Into<SourceId>, masters: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<SourceId>,
    {
        self.insert(source.into(), masters.into_iter().map(Into::into));
        self
    }

    /// Declared masters of `source`, if it was declared.
    pub fn get(&self, source: &SourceId) -> Option<&BTreeSet<SourceId>> {
        self.edges.get(source)
    }

    /// Returns `true` if `dependent` lists `master` among its masters.
    pub fn is_master_of(&self, master: &SourceId, dependent: &SourceId) -> bool {
        self.edges
            .get(dependent)
            .is_some_and(|masters| masters.contains(master))
    }

    /// Number of declared sources.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All declared sources, in id order.
    pub fn sources(&self) -> impl Iterator<Item = &SourceId> {
        self.edges.keys()
    }
}

impl MasterLookup for MasterGraph {
    fn masters(&self, source: &SourceId) -> BTreeSet<SourceId> {
        self.edges.get(source).cloned().unwrap_or_default()
    }
}

impl FromIterator<(SourceId, BTreeSet<SourceId>)> for MasterGraph {
    fn from_iter<I: IntoIterator<Item = (SourceId, BTreeSet<SourceId>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
