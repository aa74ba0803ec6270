//! Corner collapsing.
//!
//! An `Add` next to a `Delete` (in either order) is the same net change as a
//! single `Substitute`, so the pair is reported as one. This only affects
//! presentation; the distance always comes from the cost matrix.

use tracing::debug;

use super::{DecoratedMove, DecoratedPath, Edit, EditOp};

const fn is_corner(first: EditOp, second: EditOp) -> bool {
    matches!(
        (first, second),
        (EditOp::Add, EditOp::Delete) | (EditOp::Delete, EditOp::Add)
    )
}

/// Replace every adjacent `Add`/`Delete` pair with one `Substitute`.
///
/// The merged move sits on the later cell and carries the unit from the `Add`
/// side, which is always the unit of `b`. Pairs are taken left to right. A
/// merged `Substitute` can never pair again, so one pass reaches the fixpoint
/// that repeated rescans from the start would.
pub fn remove_corners<T: Copy>(path: &DecoratedPath<T>) -> DecoratedPath<T> {
    let mut out: Vec<DecoratedMove<T>> = Vec::with_capacity(path.len());
    let mut collapsed = 0usize;

    for &current in path.moves() {
        if let Some(prev) = out
            .last_mut()
            .filter(|prev| is_corner(prev.edit.op, current.edit.op))
        {
            let unit = if prev.edit.op == EditOp::Add {
                prev.edit.unit
            } else {
                current.edit.unit
            };
            *prev = DecoratedMove {
                at: current.at,
                edit: Edit::new(unit, EditOp::Substitute),
            };
            collapsed += 1;
            continue;
        }
        out.push(current);
    }

    if collapsed > 0 {
        debug!(collapsed, remaining = out.len(), "collapsed add/delete corners");
    }
    DecoratedPath::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Move;

    fn path(ops: &[(u8, EditOp)]) -> DecoratedPath<u8> {
        DecoratedPath::new(
            ops.iter()
                .enumerate()
                .map(|(k, &(unit, op))| DecoratedMove {
                    at: Move::new(k + 1, k + 1),
                    edit: Edit::new(unit, op),
                })
                .collect(),
        )
    }

    fn edits(dp: &DecoratedPath<u8>) -> Vec<(u8, EditOp)> {
        dp.edits().map(|e| (e.unit, e.op)).collect()
    }

    #[test]
    fn test_add_then_delete() {
        let dp = path(&[(b'x', EditOp::Add), (b'y', EditOp::Delete)]);
        let out = remove_corners(&dp);
        assert_eq!(edits(&out), vec![(b'x', EditOp::Substitute)]);
        assert_eq!(out.moves()[0].at, Move::new(2, 2));
    }

    #[test]
    fn test_delete_then_add_keeps_added_unit() {
        let dp = path(&[(b'y', EditOp::Delete), (b'x', EditOp::Add)]);
        assert_eq!(
            edits(&remove_corners(&dp)),
            vec![(b'x', EditOp::Substitute)]
        );
    }

    #[test]
    fn test_alternating_run() {
        let dp = path(&[
            (b'1', EditOp::Add),
            (b'2', EditOp::Delete),
            (b'3', EditOp::Add),
            (b'4', EditOp::Delete),
            (b'5', EditOp::Add),
        ]);
        assert_eq!(
            edits(&remove_corners(&dp)),
            vec![
                (b'1', EditOp::Substitute),
                (b'3', EditOp::Substitute),
                (b'5', EditOp::Add),
            ]
        );
    }

    #[test]
    fn test_same_kind_not_merged() {
        let dp = path(&[
            (b'a', EditOp::Add),
            (b'b', EditOp::Add),
            (b'c', EditOp::Equal),
            (b'd', EditOp::Delete),
            (b'e', EditOp::Delete),
        ]);
        assert_eq!(remove_corners(&dp), dp);
    }

    #[test]
    fn test_separated_by_equal() {
        let dp = path(&[
            (b'a', EditOp::Add),
            (b'b', EditOp::Equal),
            (b'c', EditOp::Delete),
        ]);
        assert_eq!(remove_corners(&dp), dp);
    }

    #[test]
    fn test_idempotent() {
        let dp = path(&[
            (b'a', EditOp::Delete),
            (b'b', EditOp::Add),
            (b'c', EditOp::Add),
            (b'd', EditOp::Delete),
            (b'e', EditOp::Substitute),
        ]);
        let once = remove_corners(&dp);
        assert_eq!(remove_corners(&once), once);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn test_empty() {
        assert!(remove_corners(&DecoratedPath::<u8>::new(Vec::new())).is_empty());
    }
}
