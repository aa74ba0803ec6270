//! Levenshtein cost matrix.
//!
//! `cost[i][j]` is the minimum number of edits turning the first `i` units of
//! `a` into the first `j` units of `b`. Moving right inserts `b[j]`, moving
//! down deletes `a[i]`, and moving diagonally substitutes or keeps a unit.

use std::fmt::Write as _;
use std::ops::Index;

use super::Move;

/// Column width used by [`CostMatrix::render`].
const CELL_WIDTH: usize = 2;

/// Dense `(|a|+1) x (|b|+1)` table of prefix edit costs, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Fill the table for `a` and `b` with the classical recurrence.
    ///
    /// Row 0 and column 0 hold the cost of building from (or reducing to) an
    /// empty prefix. Every other cell depends only on its upper, left and
    /// upper-left neighbours, so a row-then-column sweep is enough.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 0..rows {
            for j in 0..cols {
                cells[i * cols + j] = if i == 0 {
                    j
                } else if j == 0 {
                    i
                } else {
                    let mismatch = usize::from(a[i - 1] != b[j - 1]);
                    (cells[i * cols + j - 1] + 1) // insertion
                        .min(cells[(i - 1) * cols + j] + 1) // deletion
                        .min(cells[(i - 1) * cols + j - 1] + mismatch) // substitution
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows, `|a| + 1`.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|b| + 1`.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Bottom-right cell, `(|a|, |b|)`.
    pub const fn terminal(&self) -> Move {
        Move::new(self.rows - 1, self.cols - 1)
    }

    /// Cost at `at`, or `None` when it lies outside the table.
    pub fn get(&self, at: Move) -> Option<usize> {
        (at.i < self.rows && at.j < self.cols).then(|| self.cells[at.i * self.cols + at.j])
    }

    /// The edit distance, `cost[|a|][|b|]`.
    pub fn distance(&self) -> usize {
        self[self.terminal()]
    }

    /// Render the table with `b` across the top and `a` down the side.
    ///
    /// ```text
    ///        s  i  t
    ///     0  1  2  3
    ///  k  1  1  2  3
    /// ```
    pub fn render<T: Copy + Into<char>>(&self, a: &[T], b: &[T]) -> String {
        let w = CELL_WIDTH;
        let mut out = String::new();

        let _ = write!(out, "{:>width$}  ", " ", width = 2 * w);
        for &unit in b {
            let header: char = unit.into();
            let _ = write!(out, "{header:>w$} ");
        }
        out.push('\n');

        for i in 0..self.rows {
            let label = if i == 0 { ' ' } else { a[i - 1].into() };
            let _ = write!(out, "{label:>w$} ");
            for j in 0..self.cols {
                let _ = write!(out, "{:>w$} ", self[Move::new(i, j)]);
            }
            out.push('\n');
        }
        out
    }
}

impl Index<Move> for CostMatrix {
    type Output = usize;

    fn index(&self, at: Move) -> &usize {
        &self.cells[at.i * self.cols + at.j]
    }
}
