//! Typed edits and path decoration.
//!
//! Each step of a [`Path`] becomes one [`DecoratedMove`]: the cell the step
//! lands on plus the [`Edit`] it stands for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CostMatrix, Move, Path};
use crate::error::{EditDistError, EditDistResult};

/// The four edit operations, ordered as they are tallied and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EditOp {
    #[serde(rename = "a")]
    Add,
    #[serde(rename = "d")]
    Delete,
    #[serde(rename = "s")]
    Substitute,
    #[serde(rename = "e")]
    Equal,
}

impl EditOp {
    pub const ALL: [Self; 4] = [Self::Add, Self::Delete, Self::Substitute, Self::Equal];

    /// Single-letter code used in output and fixtures. These never change.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Add => "a",
            Self::Delete => "d",
            Self::Substitute => "s",
            Self::Equal => "e",
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EditOp {
    type Err = EditDistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.code() == s)
            .ok_or_else(|| EditDistError::UnknownOpCode(s.to_owned()))
    }
}

/// An operation and the unit it inserts, deletes, substitutes in, or keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<T> {
    pub unit: T,
    pub op: EditOp,
}

impl<T> Edit<T> {
    pub const fn new(unit: T, op: EditOp) -> Self {
        Self { unit, op }
    }
}

/// An edit together with the cell its step ends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoratedMove<T> {
    pub at: Move,
    pub edit: Edit<T>,
}

impl<T: Copy + Into<char>> fmt::Display for DecoratedMove<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit: char = self.edit.unit.into();
        write!(f, "[{}, '{}', {}]", self.edit.op, unit, self.at)
    }
}

/// One decorated move per step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedPath<T>(Vec<DecoratedMove<T>>);

impl<T> DecoratedPath<T> {
    pub const fn new(moves: Vec<DecoratedMove<T>>) -> Self {
        Self(moves)
    }

    pub fn moves(&self) -> &[DecoratedMove<T>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn edits(&self) -> impl Iterator<Item = &Edit<T>> {
        self.0.iter().map(|m| &m.edit)
    }

    pub fn into_edits(self) -> Vec<Edit<T>> {
        self.0.into_iter().map(|m| m.edit).collect()
    }
}

impl<T: Copy + Into<char>> fmt::Display for DecoratedPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for m in &self.0 {
            write!(f, "{sep}{m}")?;
            sep = ", ";
        }
        Ok(())
    }
}

/// Classify every step of `path` as an edit.
///
/// A diagonal step is `Equal` when the cost does not change and `Substitute`
/// otherwise, carrying `b[j]`. A down step deletes `a[i]`; a right step adds
/// `b[j]`. Any other delta is an [`EditDistError::InvalidPath`].
pub fn decorate<T: Copy>(
    a: &[T],
    b: &[T],
    cost: &CostMatrix,
    path: &Path,
) -> EditDistResult<DecoratedPath<T>> {
    let mut moves = Vec::with_capacity(path.len().saturating_sub(1));

    for (from, to) in path.steps() {
        let invalid = || EditDistError::InvalidPath { from, to };
        let (Some(before), Some(after)) = (cost.get(from), cost.get(to)) else {
            return Err(invalid());
        };

        let edit = if to == Move::new(from.i + 1, from.j + 1) {
            let op = if after == before {
                EditOp::Equal
            } else {
                EditOp::Substitute
            };
            Edit::new(b[from.j], op)
        } else if to == Move::new(from.i + 1, from.j) {
            Edit::new(a[from.i], EditOp::Delete)
        } else if to == Move::new(from.i, from.j + 1) {
            Edit::new(b[from.j], EditOp::Add)
        } else {
            return Err(invalid());
        };

        moves.push(DecoratedMove { at: to, edit });
    }

    Ok(DecoratedPath::new(moves))
}
