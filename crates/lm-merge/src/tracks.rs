//! Two-phase track list merging.

use lm_align::{align_extended, align_global, Scoring, Slot};
use lm_multiset::{intersect, without};
use lm_types::{Chain, Extent, TrackRef};

/// Accumulator for one pairwise fold step.
#[derive(Default)]
struct FoldStep {
    merged: Vec<TrackRef>,
    /// Substituted tracks from the newer list, held back until the next
    /// insertion or the end of the step.
    pending: Vec<TrackRef>,
}

impl FoldStep {
    fn apply(mut self, slot: Slot<'_, TrackRef>) -> Self {
        match slot {
            // Removals are not applied here; phase 2 decides what survives.
            Slot::Left(kept) => self.merged.push(kept.clone()),
            Slot::Right(added) => {
                self.merged.append(&mut self.pending);
                self.merged.push(added.clone());
            }
            Slot::Pair(kept, other) => {
                self.merged.push(kept.clone());
                if kept != other {
                    self.pending.push(other.clone());
                }
            }
        }
        self
    }

    fn finish(mut self) -> Vec<TrackRef> {
        self.merged.append(&mut self.pending);
        self.merged
    }
}

/// Phase 1: fold the whole chain, origin first, into one ordered list
/// holding every track any entry ever introduced.
pub fn candidate_order(chain: &Chain, scoring: Scoring) -> Vec<TrackRef> {
    let mut lists = chain.iter().map(|c| c.variant.tracks());
    let Some(origin) = lists.next() else {
        return Vec::new();
    };

    lists.fold(origin.to_vec(), |current, next| {
        align_global(&current, next, scoring)
            .into_iter()
            .fold(FoldStep::default(), FoldStep::apply)
            .finish()
    })
}

/// Phase 2: the tracks that should survive.
///
/// The multiset intersection of every extent leaf's list, followed by each
/// leaf's own occurrences beyond that common part, leaf by leaf.
pub fn authoritative_tracks(chain: &Chain, extent: &Extent) -> Vec<TrackRef> {
    let leaves: Vec<&[TrackRef]> = extent
        .contributions(chain)
        .map(|c| c.variant.tracks())
        .collect();
    let Some((first, rest)) = leaves.split_first() else {
        return Vec::new();
    };

    let common = rest
        .iter()
        .fold(first.to_vec(), |acc, next| intersect(&acc, *next));

    let mut tracks = common.clone();
    for leaf in &leaves {
        tracks.extend(without(*leaf, &common));
    }
    tracks
}

/// Combine the phase 1 candidate with the phase 2 content.
///
/// If some leaf dropped tracks (the authoritative list is shorter), the
/// authoritative list is aligned against the candidate with the extended
/// aligner and the slots carrying an authoritative track are kept in order.
/// Otherwise the candidate already is the union and is returned unchanged.
pub fn reconcile(
    candidate: Vec<TrackRef>,
    authoritative: Vec<TrackRef>,
    scoring: Scoring,
) -> Vec<TrackRef> {
    if authoritative.len() >= candidate.len() {
        return candidate;
    }

    align_extended(&candidate, &authoritative, scoring)
        .into_iter()
        .filter_map(|slot| slot.right())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lm_types::{Contribution, RecordKey, Variant};
    use proptest::prelude::*;

    fn key() -> RecordKey {
        RecordKey::from("0001A3:Skyrim.esm")
    }

    fn tracks(names: &[&str]) -> Vec<TrackRef> {
        names.iter().map(|n| TrackRef::from(*n)).collect()
    }

    fn chain(lists: &[&[&str]]) -> Chain {
        let entries = lists
            .iter()
            .enumerate()
            .map(|(i, list)| {
                Contribution::new(
                    format!("Source{i}.esp").as_str(),
                    Variant::new(key()).with_tracks(list.iter().copied()),
                )
            })
            .collect();
        Chain::new(key(), entries).unwrap()
    }

    #[test]
    fn single_entry_candidate_is_identity() {
        let c = chain(&[&["A", "B", "A"]]);
        assert_eq!(candidate_order(&c, Scoring::GLOBAL_DEFAULT), tracks(&["A", "B", "A"]));
    }

    #[test]
    fn candidate_keeps_removed_and_appends_added() {
        let c = chain(&[&["A", "B", "C"], &["A", "C"], &["A", "B", "C", "D"]]);
        assert_eq!(
            candidate_order(&c, Scoring::GLOBAL_DEFAULT),
            tracks(&["A", "B", "C", "D"])
        );
    }

    #[test]
    fn substitutions_are_queued_until_the_end() {
        // A B C vs A C D aligns as A-A, B-C, C-D: C and D are substitutions.
        let c = chain(&[&["A", "B", "C"], &["A", "C", "D"]]);
        assert_eq!(
            candidate_order(&c, Scoring::GLOBAL_DEFAULT),
            tracks(&["A", "B", "C", "C", "D"])
        );
    }

    #[test]
    fn insertion_flushes_pending_substitutions() {
        // X Y vs Z Y W: Z substitutes X (pending), Y matches, W is inserted
        // after the pending Z is flushed.
        let c = chain(&[&["X", "Y"], &["Z", "Y", "W"]]);
        assert_eq!(
            candidate_order(&c, Scoring::GLOBAL_DEFAULT),
            tracks(&["X", "Y", "Z", "W"])
        );
    }

    #[test]
    fn absent_track_lists_read_as_empty() {
        let mut c = chain(&[&["A"]]);
        c.push(Contribution::new("Bare.esp", Variant::new(key()))).unwrap();
        assert_eq!(candidate_order(&c, Scoring::GLOBAL_DEFAULT), tracks(&["A"]));
    }

    #[test]
    fn authoritative_is_common_then_exclusives() {
        let c = chain(&[&["A", "B", "C"], &["A", "C"], &["A", "C", "D"]]);
        let extent = Extent::new(key(), vec![1, 2]);
        assert_eq!(authoritative_tracks(&c, &extent), tracks(&["A", "C", "D"]));
    }

    #[test]
    fn authoritative_keeps_each_leafs_duplicates() {
        let c = chain(&[&[], &["A", "B", "B"], &["B", "C"]]);
        let extent = Extent::new(key(), vec![1, 2]);
        assert_eq!(
            authoritative_tracks(&c, &extent),
            tracks(&["B", "A", "B", "C"])
        );
    }

    #[test]
    fn authoritative_of_single_leaf_is_its_list() {
        let c = chain(&[&["A"], &["B", "A", "B"]]);
        let extent = Extent::new(key(), vec![1]);
        assert_eq!(authoritative_tracks(&c, &extent), tracks(&["B", "A", "B"]));
    }

    #[test]
    fn reconcile_keeps_candidate_when_nothing_dropped() {
        let candidate = tracks(&["A", "B", "C"]);
        let authoritative = tracks(&["C", "B", "A"]);
        assert_eq!(
            reconcile(candidate.clone(), authoritative, Scoring::EXTENDED_DEFAULT),
            candidate
        );
    }

    fn track_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
        let track = prop::sample::select(vec!["A", "B", "C", "D"]).prop_map(String::from);
        prop::collection::vec(prop::collection::vec(track, 0..6), 1..5)
    }

    proptest! {
        #[test]
        fn single_leaf_merge_is_the_leaf(lists in track_lists()) {
            let refs: Vec<Vec<&str>> = lists
                .iter()
                .map(|l| l.iter().map(String::as_str).collect())
                .collect();
            let slices: Vec<&[&str]> = refs.iter().map(Vec::as_slice).collect();
            let c = chain(&slices);
            let extent = Extent::last_of(&c);

            let candidate = candidate_order(&c, Scoring::GLOBAL_DEFAULT);
            let authoritative = authoritative_tracks(&c, &extent);
            let merged = reconcile(candidate, authoritative, Scoring::EXTENDED_DEFAULT);
            prop_assert_eq!(merged, tracks(refs.last().unwrap()));
        }

        #[test]
        fn candidate_holds_every_track(lists in track_lists()) {
            let refs: Vec<Vec<&str>> = lists
                .iter()
                .map(|l| l.iter().map(String::as_str).collect())
                .collect();
            let slices: Vec<&[&str]> = refs.iter().map(Vec::as_slice).collect();
            let candidate = candidate_order(&chain(&slices), Scoring::GLOBAL_DEFAULT);
            for list in &refs {
                for name in list {
                    prop_assert!(candidate.contains(&TrackRef::from(*name)));
                }
            }
        }
    }

    #[test]
    fn reconcile_keeps_only_authoritative_tracks() {
        let candidate = tracks(&["A", "B", "C", "C", "D"]);
        let authoritative = tracks(&["A", "C", "D"]);
        assert_eq!(
            reconcile(candidate, authoritative, Scoring::EXTENDED_DEFAULT),
            tracks(&["A", "C", "D"])
        );
    }
}
