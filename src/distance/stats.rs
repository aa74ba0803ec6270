//! Edit operation counts.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::{Edit, EditOp};

/// Count of each [`EditOp`]. All four operations are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<EditOp, usize>);

impl Tally {
    pub fn get(&self, op: EditOp) -> usize {
        self.0.get(&op).copied().unwrap_or(0)
    }

    /// Sum over all operations, equal to the number of edits tallied.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EditOp, usize)> + '_ {
        self.0.iter().map(|(&op, &n)| (op, n))
    }
}

impl fmt::Display for Tally {
    /// `a:1, d:0, s:2, e:5`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (op, n) in self.iter() {
            write!(f, "{sep}{op}:{n}")?;
            sep = ", ";
        }
        Ok(())
    }
}

/// Count the operations in `edits`.
pub fn tally<'a, T: 'a>(edits: impl IntoIterator<Item = &'a Edit<T>>) -> Tally {
    let mut counts: BTreeMap<EditOp, usize> = EditOp::ALL.into_iter().map(|op| (op, 0)).collect();
    for edit in edits {
        *counts.entry(edit.op).or_insert(0) += 1;
    }
    Tally(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_all_keys() {
        let t = tally::<u8>(&[]);
        assert_eq!(t.iter().count(), 4);
        assert_eq!(t.total(), 0);
        assert_eq!(t.to_string(), "a:0, d:0, s:0, e:0");
    }

    #[test]
    fn test_counts() {
        let edits = [
            Edit::new(b'a', EditOp::Equal),
            Edit::new(b'b', EditOp::Substitute),
            Edit::new(b'c', EditOp::Equal),
            Edit::new(b'd', EditOp::Add),
        ];
        let t = tally(&edits);
        assert_eq!(t.get(EditOp::Equal), 2);
        assert_eq!(t.get(EditOp::Substitute), 1);
        assert_eq!(t.get(EditOp::Add), 1);
        assert_eq!(t.get(EditOp::Delete), 0);
        assert_eq!(t.total(), edits.len());
        assert_eq!(t.to_string(), "a:1, d:0, s:1, e:2");
    }

    #[test]
    fn test_serialize() {
        let t = tally(&[Edit::new('x', EditOp::Delete)]);
        let json = serde_json::to_value(&t).expect("serialize");
        assert_eq!(json, serde_json::json!({"a": 0, "d": 1, "s": 0, "e": 0}));
    }
}
