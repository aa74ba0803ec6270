//! Path search through a cost matrix.
//!
//! A depth-first walk from `(0, 0)` to `(|a|, |b|)`. At each cell the in-bounds
//! moves (diagonal, down, right) are ranked by the cost of the cell they land
//! on and then by how far that cell sits from the main diagonal. The lowest
//! ranked move is explored first, and the walk stops as soon as the terminal
//! cell is generated.
//!
//! The ranking is one deterministic choice among the optimal alignments. It
//! is kept stable so edit scripts stay reproducible, not because it yields the
//! most intuitive alignment.

use std::fmt;

use tracing::debug;

use super::CostMatrix;

/// A cell coordinate in the cost matrix: `i` indexes `a`, `j` indexes `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub i: usize,
    pub j: usize,
}

impl Move {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Distance from the main diagonal, `|i - j|`.
    pub const fn diagonal_offset(self) -> usize {
        self.i.abs_diff(self.j)
    }

    const fn diagonal(self) -> Self {
        Self::new(self.i + 1, self.j + 1)
    }

    const fn down(self) -> Self {
        Self::new(self.i + 1, self.j)
    }

    const fn right(self) -> Self {
        Self::new(self.i, self.j + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Ordered cells from `(0, 0)` to the terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Move>);

impl Path {
    pub const fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Move, Move)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

/// A visited cell and the arena index of the cell it was reached from.
struct Node {
    at: Move,
    parent: Option<usize>,
}

/// Find the first path the ranking reaches, or `None` if the stack drains.
///
/// Nodes live in an arena with parent links so each stack entry is a single
/// index instead of a copy of the partial path.
pub fn search(cost: &CostMatrix) -> Option<Path> {
    let target = cost.terminal();
    if target == Move::ORIGIN {
        return Some(Path::new(vec![Move::ORIGIN]));
    }

    let mut nodes = vec![Node {
        at: Move::ORIGIN,
        parent: None,
    }];
    let mut stack = vec![0usize];

    while let Some(head) = stack.pop() {
        let here = nodes[head].at;

        let mut candidates: Vec<((usize, usize), Move)> =
            [here.diagonal(), here.down(), here.right()]
                .into_iter()
                .filter_map(|next| cost.get(next).map(|c| ((c, next.diagonal_offset()), next)))
                .collect();
        // Stable, so equal weights keep diagonal, down, right order.
        candidates.sort_by_key(|&(weight, _)| weight);

        // Push the worst first so the best is popped next.
        for &(_, next) in candidates.iter().rev() {
            nodes.push(Node {
                at: next,
                parent: Some(head),
            });
            let index = nodes.len() - 1;
            if next == target {
                let path = unwind(&nodes, index);
                debug!(cells = path.len(), visited = nodes.len(), "path found");
                return Some(path);
            }
            stack.push(index);
        }
    }

    None
}

fn unwind(nodes: &[Node], mut index: usize) -> Path {
    let mut moves = vec![nodes[index].at];
    while let Some(parent) = nodes[index].parent {
        moves.push(nodes[parent].at);
        index = parent;
    }
    moves.reverse();
    Path::new(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(a: &str, b: &str) -> Vec<(usize, usize)> {
        let cost = CostMatrix::build(a.as_bytes(), b.as_bytes());
        let path = search(&cost).expect("path");
        path.moves().iter().map(|m| (m.i, m.j)).collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(cells("", ""), vec![(0, 0)]);
    }

    #[test]
    fn test_identical_walks_diagonal() {
        assert_eq!(cells("abc", "abc"), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(cells("", "ab"), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(cells("ab", ""), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_tie_prefers_down_over_right() {
        // From (1, 1) both (2, 1) and (1, 2) cost 1 at offset 1.
        assert_eq!(
            cells("ab", "baa"),
            vec![(0, 0), (1, 1), (2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_terminal_taken_when_generated() {
        // (2, 2) costs more than (2, 1) but ends the walk as soon as it is seen.
        assert_eq!(cells("ab", "ba"), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(cells("abc", "abd"), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_steps_are_unit_moves() {
        let cost = CostMatrix::build(b"kitten", b"sitting");
        let path = search(&cost).expect("path");
        assert_eq!(path.moves().first(), Some(&Move::ORIGIN));
        assert_eq!(path.moves().last(), Some(&Move::new(6, 7)));
        for (from, to) in path.steps() {
            let di = to.i - from.i;
            let dj = to.j - from.j;
            assert!(matches!((di, dj), (1, 1) | (1, 0) | (0, 1)));
        }
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Move::new(2, 5).diagonal_offset(), 3);
    }
}
