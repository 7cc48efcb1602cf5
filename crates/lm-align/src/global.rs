//! Global (Needleman-Wunsch) alignment.

use crate::scoring::Scoring;
use crate::slot::Slot;
use crate::table::ScoreTable;

/// Align two sequences end to end.
///
/// The border row and column accumulate one gap penalty per step. Every
/// interior cell is the best of the diagonal (plus similarity), the cell
/// above plus a gap, and the cell to the left plus a gap. Traceback starts
/// at the bottom-right corner and, among the moves that reproduce the
/// current score, takes the diagonal first, then the vertical move (left
/// only), then the horizontal move (right only).
///
/// Every element of both inputs appears in exactly one slot.
pub fn align_global<'a, T: PartialEq>(
    left: &'a [T],
    right: &'a [T],
    scoring: Scoring,
) -> Vec<Slot<'a, T>> {
    let rows = left.len();
    let columns = right.len();
    let gap = scoring.gap();

    let mut table = ScoreTable::new(rows, columns);
    for column in 1..=columns {
        table.set(0, column, table.get(0, column - 1).saturating_add(gap));
    }

    for row in 1..=rows {
        table.set(row, 0, table.get(row - 1, 0).saturating_add(gap));
        for column in 1..=columns {
            let diagonal = table
                .get(row - 1, column - 1)
                .saturating_add(scoring.similarity(&left[row - 1], &right[column - 1]));
            let up = table.get(row - 1, column).saturating_add(gap);
            let across = table.get(row, column - 1).saturating_add(gap);
            table.set(row, column, diagonal.max(up).max(across));
        }
    }

    let mut slots = Vec::with_capacity(rows.max(columns));
    let (mut i, mut j) = (rows, columns);

    while i > 0 || j > 0 {
        let score = table.get(i, j);
        let diagonal = i > 0
            && j > 0
            && score
                == table
                    .get(i - 1, j - 1)
                    .saturating_add(scoring.similarity(&left[i - 1], &right[j - 1]));
        if diagonal {
            i -= 1;
            j -= 1;
            slots.push(Slot::Pair(&left[i], &right[j]));
        } else if i > 0 && score == table.get(i - 1, j).saturating_add(gap) {
            i -= 1;
            slots.push(Slot::Left(&left[i]));
        } else {
            j -= 1;
            slots.push(Slot::Right(&right[j]));
        }
    }

    slots.reverse();
    slots
}
