//! Patch planning: merge every record that has more than one leaf override.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lm_extent::{resolve_extent, MasterLookup};
use lm_types::{Chain, MergedRecord, RecordKey};

use crate::config::MergeConfig;
use crate::error::MergeResult;
use crate::merger::merge_record;

/// Host-supplied enumeration of override chains.
pub trait ChainProvider {
    /// Every record key with at least one contribution, in a stable order.
    fn record_keys(&self) -> Vec<RecordKey>;

    /// The priority-ordered chain of `key`, or `None` if nothing
    /// contributes to it.
    fn chain(&self, key: &RecordKey) -> Option<Chain>;
}

/// The outcome of planning a patch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchSet {
    /// Merged records that differ from their winning override.
    pub records: Vec<MergedRecord>,
    /// Records that needed merging but came out identical to their winning
    /// override.
    #[serde(default)]
    pub skipped: Vec<RecordKey>,
}

impl PatchSet {
    /// Create an empty patch set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records the patch would write.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the patch writes nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Merge every record of `provider` whose extent holds more than one
/// override.
///
/// Records whose merge equals the winning override (ignoring bookkeeping
/// fields) are listed as skipped rather than written.
pub fn plan_patch<P>(provider: &P, config: &MergeConfig) -> MergeResult<PatchSet>
where
    P: ChainProvider + MasterLookup + ?Sized,
{
    let mut patch = PatchSet::new();

    for key in provider.record_keys() {
        let Some(chain) = provider.chain(&key) else {
            continue;
        };
        let extent = resolve_extent(&chain, provider);
        if extent.len() <= 1 {
            debug!(%key, "single leaf override; nothing to merge");
            continue;
        }

        let merged = merge_record(&chain, &extent, config)?;
        let sources: Vec<&str> = merged.sources.iter().map(|s| s.as_str()).collect();
        info!(
            %key,
            editor_id = merged.editor_id.as_deref().unwrap_or(""),
            sources = %sources.join(", "),
            "merged record"
        );

        let unchanged = chain
            .winner()
            .is_some_and(|winner| merged.matches_variant(&winner.variant));
        if unchanged {
            info!(%key, "merged record equals winning override; skipping");
            patch.skipped.push(key);
        } else {
            patch.records.push(merged);
        }
    }

    Ok(patch)
}
