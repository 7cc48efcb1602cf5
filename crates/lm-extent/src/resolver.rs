//! Leaf-override selection over a chain.

use tracing::{debug, warn};

use lm_types::{Chain, Extent};

use crate::graph::MasterLookup;

/// Compute the extent of `chain`: the contributions whose source is not a
/// master of any other contributing source, in chain order.
///
/// Chains of two or fewer entries skip the dependency check and yield only
/// their last entry. For longer chains an `n x n` domination matrix over
/// chain indices is filled from `lookup`: `dominated[k][i]` is set when
/// contribution `i` lists the source of contribution `k` as a master.
/// A contribution is kept iff its row is empty. Sources without masters
/// dominate no one.
///
/// The result is non-empty for every non-empty chain. If `lookup` describes
/// a cycle that leaves every contribution dominated, the last entry is used.
pub fn resolve_extent<L: MasterLookup + ?Sized>(chain: &Chain, lookup: &L) -> Extent {
    let count = chain.len();
    if count <= 2 {
        let extent = Extent::last_of(chain);
        debug!(key = %chain.key(), contributions = count, "extent short-cut to last override");
        return extent;
    }

    let entries = chain.contributions();
    let mut dominated = vec![false; count * count];

    for (i, dependent) in entries.iter().enumerate() {
        let masters = lookup.masters(&dependent.source);
        if masters.is_empty() {
            continue;
        }
        for (k, candidate) in entries.iter().enumerate() {
            if k != i && masters.contains(&candidate.source) {
                dominated[k * count + i] = true;
            }
        }
    }

    let members: Vec<usize> = (0..count)
        .filter(|&k| !dominated[k * count..(k + 1) * count].iter().any(|&d| d))
        .collect();

    if members.is_empty() {
        warn!(key = %chain.key(), "every override is dominated; master graph has a cycle");
        return Extent::last_of(chain);
    }

    let extent = Extent::new(chain.key().clone(), members);
    debug!(
        key = %chain.key(),
        contributions = count,
        extent = extent.len(),
        "resolved extent"
    );
    extent
}

/// Returns `true` if more than one override survives extent resolution,
/// i.e. the record actually needs merging.
pub fn has_multiple_overrides<L: MasterLookup + ?Sized>(chain: &Chain, lookup: &L) -> bool {
    resolve_extent(chain, lookup).len() > 1
}
