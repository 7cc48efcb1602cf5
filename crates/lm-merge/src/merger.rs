//! Merge one record's chain into a [`MergedRecord`].

use tracing::debug;

use lm_extent::{resolve_extent, MasterLookup};
use lm_types::{Chain, Extent, MergedRecord};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::scalars::resolve_scalars;
use crate::tracks::{authoritative_tracks, candidate_order, reconcile};

/// Check that `extent` is a non-empty, ascending index subset of `chain`.
fn validate(chain: &Chain, extent: &Extent) -> MergeResult<()> {
    if chain.is_empty() {
        return Err(MergeError::EmptyChain {
            key: chain.key().clone(),
        });
    }
    if extent.key() != chain.key() {
        return Err(MergeError::ExtentKeyMismatch {
            chain: chain.key().clone(),
            extent: extent.key().clone(),
        });
    }
    if extent.is_empty() {
        return Err(MergeError::EmptyExtent {
            key: chain.key().clone(),
        });
    }

    let mut previous: Option<usize> = None;
    for &index in extent.indices() {
        if index >= chain.len() {
            return Err(MergeError::ExtentIndexOutOfRange {
                key: chain.key().clone(),
                index,
                len: chain.len(),
            });
        }
        if let Some(previous) = previous.filter(|&p| p >= index) {
            return Err(MergeError::ExtentNotAscending {
                key: chain.key().clone(),
                previous,
                index,
            });
        }
        previous = Some(index);
    }
    Ok(())
}

/// Merge `chain` given its resolved `extent`.
///
/// Scalars come from the extent overrides (see
/// [`resolve_scalars`](crate::resolve_scalars)); the editor id is the
/// origin's. Tracks are the phase 1 candidate reconciled with the phase 2
/// authoritative content.
///
/// Fails without producing anything if the chain is empty or the extent is
/// empty, belongs to another record, or does not index into the chain in
/// ascending order.
pub fn merge_record(
    chain: &Chain,
    extent: &Extent,
    config: &MergeConfig,
) -> MergeResult<MergedRecord> {
    validate(chain, extent)?;

    let origin = &chain.contributions()[0].variant;
    let scalars = resolve_scalars(
        origin,
        extent.contributions(chain).map(|c| &c.variant),
        config,
    );

    let candidate = candidate_order(chain, config.fold_scoring);
    let authoritative = authoritative_tracks(chain, extent);
    debug!(
        key = %chain.key(),
        candidate = candidate.len(),
        authoritative = authoritative.len(),
        "track phases computed"
    );
    let tracks = reconcile(candidate, authoritative, config.reconcile_scoring);

    Ok(MergedRecord {
        key: chain.key().clone(),
        editor_id: origin.editor_id.clone(),
        flags: scalars.flags,
        fade_duration: scalars.fade_duration,
        priority: scalars.priority,
        ducking_decibel: scalars.ducking_decibel,
        tracks,
        sources: extent.sources(chain),
    })
}

/// Resolve the extent of `chain` through `lookup`, then merge.
pub fn merge_chain<L: MasterLookup + ?Sized>(
    chain: &Chain,
    lookup: &L,
    config: &MergeConfig,
) -> MergeResult<MergedRecord> {
    let extent = resolve_extent(chain, lookup);
    merge_record(chain, &extent, config)
}
