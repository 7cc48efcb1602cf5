//! The load order: every source, in ascending priority, with its records.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use lm_extent::MasterLookup;
use lm_merge::ChainProvider;
use lm_types::{Chain, Contribution, RecordKey, SourceId, Variant};

use crate::error::{StoreError, StoreResult};
use crate::format::FileFormat;

fn enabled_by_default() -> bool {
    true
}

/// One source in the load order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub id: SourceId,
    /// Sources this one depends on. Each must be loaded earlier.
    #[serde(default)]
    pub masters: Vec<SourceId>,
    /// Disabled sources keep their place but contribute nothing.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub records: Vec<Variant>,
}

impl SourceEntry {
    pub fn new(id: impl Into<SourceId>) -> Self {
        Self {
            id: id.into(),
            masters: Vec::new(),
            enabled: true,
            records: Vec::new(),
        }
    }

    pub fn with_masters<I, S>(mut self, masters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SourceId>,
    {
        self.masters = masters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_record(mut self, record: Variant) -> Self {
        self.records.push(record);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// This source's version of `key`. If the source lists the record twice,
    /// the first one counts.
    pub fn record(&self, key: &RecordKey) -> Option<&Variant> {
        self.records.iter().find(|v| &v.key == key)
    }
}

/// All sources, lowest priority first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOrder {
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

impl LoadOrder {
    /// Build a load order from entries, validating it.
    pub fn new(sources: Vec<SourceEntry>) -> StoreResult<Self> {
        let order = Self { sources };
        order.validate()?;
        Ok(order)
    }

    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        let order: Self = toml::from_str(s)?;
        order.validate()?;
        Ok(order)
    }

    pub fn from_json_str(s: &str) -> StoreResult<Self> {
        let order: Self = serde_json::from_str(s)?;
        order.validate()?;
        Ok(order)
    }

    /// Read a load order file, choosing the parser by extension.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let format = FileFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let order = match format {
            FileFormat::Toml => Self::from_toml_str(&text)?,
            FileFormat::Json => Self::from_json_str(&text)?,
        };
        debug!(path = %path.display(), sources = order.len(), "load order read");
        Ok(order)
    }

    /// Reject duplicate sources and masters not loaded before their
    /// dependent. Disabled sources still count as loaded.
    pub fn validate(&self) -> StoreResult<()> {
        let mut loaded: HashSet<&SourceId> = HashSet::new();
        for entry in &self.sources {
            for master in &entry.masters {
                if !loaded.contains(master) {
                    return Err(StoreError::MasterNotLoaded {
                        source_id: entry.id.clone(),
                        master: master.clone(),
                    });
                }
            }
            if !loaded.insert(&entry.id) {
                return Err(StoreError::DuplicateSource(entry.id.clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Look up a source by id, enabled or not.
    pub fn source(&self, id: &SourceId) -> Option<&SourceEntry> {
        self.sources.iter().find(|s| &s.id == id)
    }

    /// Enabled sources in load order.
    pub fn enabled(&self) -> impl Iterator<Item = &SourceEntry> {
        self.sources.iter().filter(|s| s.enabled)
    }
}

impl MasterLookup for LoadOrder {
    fn masters(&self, source: &SourceId) -> BTreeSet<SourceId> {
        self.enabled()
            .find(|s| &s.id == source)
            .map(|s| s.masters.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl ChainProvider for LoadOrder {
    /// Keys in order of first appearance across enabled sources.
    fn record_keys(&self) -> Vec<RecordKey> {
        let mut seen = HashSet::new();
        self.enabled()
            .flat_map(|s| s.records.iter())
            .filter(|v| seen.insert(&v.key))
            .map(|v| v.key.clone())
            .collect()
    }

    fn chain(&self, key: &RecordKey) -> Option<Chain> {
        let entries: Vec<Contribution> = self
            .enabled()
            .filter_map(|s| {
                s.record(key)
                    .map(|v| Contribution::new(s.id.clone(), v.clone()))
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        // Every entry was selected by `key`, so the chain cannot mismatch.
        Chain::new(key.clone(), entries).ok()
    }
}
