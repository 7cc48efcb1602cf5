//! Extended local alignment.
//!
//! A Smith-Waterman core (cells floor at zero, traceback from the best cell
//! until a zero cell) whose uncovered head and tail are attached as straight
//! lines, so the result still covers both sequences completely.

use crate::scoring::Scoring;
use crate::slot::Slot;
use crate::table::ScoreTable;

/// Align the best-matching local region of two sequences and extend it to
/// cover both inputs.
///
/// 1. Fill a table whose cells are the best of diagonal, vertical,
///    horizontal and zero. The first cell (row-major) holding the strict
///    maximum is the traceback start.
/// 2. Trace back from it with the global tie-break order (diagonal, then
///    vertical, then horizontal) until a zero cell is reached.
/// 3. Walk the remaining head backwards, pairing while both sides have
///    elements and then emitting the longer side alone.
/// 4. After the best cell, pair the tails positionally, again emitting the
///    longer side alone once the shorter runs out.
///
/// Head and tail pairs are not re-scored, so they may join unequal elements.
pub fn align_extended<'a, T: PartialEq>(
    left: &'a [T],
    right: &'a [T],
    scoring: Scoring,
) -> Vec<Slot<'a, T>> {
    let rows = left.len();
    let columns = right.len();
    let gap = scoring.gap();

    let mut table = ScoreTable::new(rows, columns);
    let (mut best_row, mut best_column) = (0, 0);

    for row in 1..=rows {
        for column in 1..=columns {
            let diagonal = table
                .get(row - 1, column - 1)
                .saturating_add(scoring.similarity(&left[row - 1], &right[column - 1]));
            let up = table.get(row - 1, column).saturating_add(gap);
            let across = table.get(row, column - 1).saturating_add(gap);
            let score = diagonal.max(up).max(across).max(0);

            if score > table.get(best_row, best_column) {
                best_row = row;
                best_column = column;
            }
            table.set(row, column, score);
        }
    }

    let mut slots = Vec::with_capacity(rows.max(columns));
    let (mut i, mut j) = (best_row, best_column);

    // Border cells are zero, so a non-zero cell always has i > 0 and j > 0.
    while table.get(i, j) != 0 {
        let score = table.get(i, j);
        let diagonal = table
            .get(i - 1, j - 1)
            .saturating_add(scoring.similarity(&left[i - 1], &right[j - 1]));
        if score == diagonal {
            i -= 1;
            j -= 1;
            slots.push(Slot::Pair(&left[i], &right[j]));
        } else if score == table.get(i - 1, j).saturating_add(gap) {
            i -= 1;
            slots.push(Slot::Left(&left[i]));
        } else {
            j -= 1;
            slots.push(Slot::Right(&right[j]));
        }
    }

    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            i -= 1;
            j -= 1;
            slots.push(Slot::Pair(&left[i], &right[j]));
        } else if i > 0 {
            i -= 1;
            slots.push(Slot::Left(&left[i]));
        } else {
            j -= 1;
            slots.push(Slot::Right(&right[j]));
        }
    }

    slots.reverse();

    let (mut i, mut j) = (best_row, best_column);
    while i < rows || j < columns {
        if i < rows && j < columns {
            slots.push(Slot::Pair(&left[i], &right[j]));
            i += 1;
            j += 1;
        } else if i < rows {
            slots.push(Slot::Left(&left[i]));
            i += 1;
        } else {
            slots.push(Slot::Right(&right[j]));
            j += 1;
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn core_with_head_and_tail_extensions() {
        let left = ['X', 'A', 'B', 'C', 'Y', 'Z'];
        let right = ['Q', 'A', 'B', 'C', 'W'];
        let slots = align_extended(&left, &right, Scoring::EXTENDED_DEFAULT);
        assert_eq!(
            slots,
            vec![
                Slot::Pair(&'X', &'Q'),
                Slot::Pair(&'A', &'A'),
                Slot::Pair(&'B', &'B'),
                Slot::Pair(&'C', &'C'),
                Slot::Pair(&'Y', &'W'),
                Slot::Left(&'Z'),
            ]
        );
        // Head and tail pairs are positional, not matches.
        assert!(!slots[0].is_match());
        assert!(!slots[4].is_match());
    }

    #[test]
    fn extreme_scoring_does_not_overflow() {
        let scoring = Scoring::new(i32::MAX, i32::MIN).unwrap();
        let slots = align_extended(&[7, 1, 2], &[1, 2, 9], scoring);
        assert_eq!(
            slots,
            vec![
                Slot::Left(&7),
                Slot::Pair(&1, &1),
                Slot::Pair(&2, &2),
                Slot::Right(&9),
            ]
        );
    }

    #[test]
    fn swapped_pair_keeps_first_local_match() {
        // (1, 2) and (2, 1) both score 1; the row-major first one wins.
        let left = ['A', 'B'];
        let right = ['B', 'A'];
        let slots = align_extended(&left, &right, Scoring::EXTENDED_DEFAULT);
        assert_eq!(
            slots,
            vec![Slot::Right(&'B'), Slot::Pair(&'A', &'A'), Slot::Left(&'B')]
        );
    }

    #[test]
    fn no_match_is_a_straight_line() {
        let left = ['A', 'B'];
        let right = ['C', 'D', 'E'];
        let slots = align_extended(&left, &right, Scoring::EXTENDED_DEFAULT);
        assert_eq!(
            slots,
            vec![
                Slot::Pair(&'A', &'C'),
                Slot::Pair(&'B', &'D'),
                Slot::Right(&'E'),
            ]
        );
    }

    #[test]
    fn both_empty_yields_nothing() {
        let empty: [char; 0] = [];
        assert!(align_extended(&empty, &empty, Scoring::EXTENDED_DEFAULT).is_empty());
    }

    #[test]
    fn one_empty_is_pure_tail() {
        let empty: [char; 0] = [];
        let full = ['A', 'B'];
        assert_eq!(
            align_extended(&empty, &full, Scoring::EXTENDED_DEFAULT),
            vec![Slot::Right(&'A'), Slot::Right(&'B')]
        );
        assert_eq!(
            align_extended(&full, &empty, Scoring::EXTENDED_DEFAULT),
            vec![Slot::Left(&'A'), Slot::Left(&'B')]
        );
    }

    #[test]
    fn local_core_may_contain_gaps() {
        // A B C against A C with a cheap gap: A-A, B-gap, C-C is the core.
        let left = ['A', 'B', 'C'];
        let right = ['A', 'C'];
        let scoring = Scoring::new(3, -1).unwrap();
        let slots = align_extended(&left, &right, scoring);
        assert_eq!(
            slots,
            vec![Slot::Pair(&'A', &'A'), Slot::Left(&'B'), Slot::Pair(&'C', &'C')]
        );
    }

    fn seq() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..5, 0..12)
    }

    proptest! {
        #[test]
        fn consumes_every_element_once(a in seq(), b in seq()) {
            let slots = align_extended(&a, &b, Scoring::EXTENDED_DEFAULT);
            let lefts: Vec<u8> = slots.iter().filter_map(|slot| slot.left()).copied().collect();
            let rights: Vec<u8> = slots.iter().filter_map(|slot| slot.right()).copied().collect();
            prop_assert_eq!(lefts, a);
            prop_assert_eq!(rights, b);
        }

        #[test]
        fn self_alignment_pairs_every_position(a in seq()) {
            let slots = align_extended(&a, &a, Scoring::EXTENDED_DEFAULT);
            prop_assert_eq!(slots.len(), a.len());
            prop_assert!(slots.iter().all(|slot| !slot.is_gap()));
        }
    }
}
