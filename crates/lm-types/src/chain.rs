//! Override chains and their extents.
//!
//! A [`Chain`] is a flat arena of contributions for one record. An
//! [`Extent`] refers back into it by index, so narrowing a chain never
//! clones a variant.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::{RecordKey, SourceId};
use crate::record::Variant;

/// One source's variant of a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub source: SourceId,
    pub variant: Variant,
}

impl Contribution {
    pub fn new(source: impl Into<SourceId>, variant: Variant) -> Self {
        Self {
            source: source.into(),
            variant,
        }
    }
}

/// All contributions to a record, ordered by ascending source priority.
///
/// Index 0 is the origin; the last entry is the most specific override.
///
/// Deserialization goes through [`Chain::new`], so a document holding a
/// variant of another record is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChainFields")]
pub struct Chain {
    key: RecordKey,
    entries: Vec<Contribution>,
}

/// Unchecked wire shape of a [`Chain`].
#[derive(Deserialize)]
struct ChainFields {
    key: RecordKey,
    entries: Vec<Contribution>,
}

impl TryFrom<ChainFields> for Chain {
    type Error = TypeError;

    fn try_from(fields: ChainFields) -> Result<Self, Self::Error> {
        Chain::new(fields.key, fields.entries)
    }
}

impl Chain {
    /// Build a chain, rejecting any contribution for a different record.
    pub fn new(key: RecordKey, entries: Vec<Contribution>) -> Result<Self, TypeError> {
        if let Some(stray) = entries.iter().find(|c| c.variant.key != key) {
            return Err(TypeError::KeyMismatch {
                expected: key,
                actual: stray.variant.key.clone(),
            });
        }
        Ok(Self { key, entries })
    }

    /// Build a chain from contributions, taking the key from the first one.
    ///
    /// Returns `Ok(None)` for an empty input.
    pub fn from_contributions(entries: Vec<Contribution>) -> Result<Option<Self>, TypeError> {
        match entries.first() {
            Some(first) => {
                let key = first.variant.key.clone();
                Self::new(key, entries).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Append a more specific override.
    pub fn push(&mut self, contribution: Contribution) -> Result<(), TypeError> {
        if contribution.variant.key != self.key {
            return Err(TypeError::KeyMismatch {
                expected: self.key.clone(),
                actual: contribution.variant.key,
            });
        }
        self.entries.push(contribution);
        Ok(())
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contribution> {
        self.entries.get(index)
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contribution> {
        self.entries.iter()
    }

    /// The lowest-priority contribution, the record as first defined.
    pub fn origin(&self) -> Option<&Contribution> {
        self.entries.first()
    }

    /// The highest-priority contribution, the override that would win
    /// without merging.
    pub fn winner(&self) -> Option<&Contribution> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Contribution;
    type IntoIter = std::slice::Iter<'a, Contribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The undominated ("leaf") overrides of a chain, as ascending chain indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    key: RecordKey,
    members: Vec<usize>,
}

impl Extent {
    /// Wrap a set of chain indices. Consumers validate the indices against
    /// the chain they are used with.
    pub fn new(key: RecordKey, members: Vec<usize>) -> Self {
        Self { key, members }
    }

    /// The extent holding only the last entry of `chain` (empty for an
    /// empty chain).
    pub fn last_of(chain: &Chain) -> Self {
        let members = match chain.len() {
            0 => Vec::new(),
            n => vec![n - 1],
        };
        Self::new(chain.key().clone(), members)
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn indices(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member contributions, in chain order. Indices outside `chain`
    /// are skipped.
    pub fn contributions<'a>(&'a self, chain: &'a Chain) -> impl Iterator<Item = &'a Contribution> + 'a {
        self.members.iter().filter_map(move |&i| chain.get(i))
    }

    /// The member source ids, in chain order.
    pub fn sources(&self, chain: &Chain) -> Vec<SourceId> {
        self.contributions(chain).map(|c| c.source.clone()).collect()
    }
}
