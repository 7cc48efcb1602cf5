/// Dense `(rows + 1) x (columns + 1)` dynamic-programming score table.
///
/// Cells are `i64` so that any validated `i32` scoring fits; the aligners
/// add into them with saturating arithmetic.
pub(crate) struct ScoreTable {
    width: usize,
    cells: Vec<i64>,
}

impl ScoreTable {
    /// A zero-filled table sized for sequences of `rows` and `columns`
    /// elements (one extra border row and column).
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        let width = columns + 1;
        Self {
            width,
            cells: vec![0; (rows + 1) * width],
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, column: usize) -> i64 {
        self.cells[row * self.width + column]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, column: usize, score: i64) {
        self.cells[row * self.width + column] = score;
    }
}
