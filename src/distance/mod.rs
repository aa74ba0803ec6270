//! Levenshtein distance with edit-script reconstruction.
//!
//! The pipeline runs strictly forward, each stage reading the previous
//! stage's output:
//!
//! 1. [`CostMatrix::build`] fills the prefix cost table.
//! 2. [`path::search`] walks one path from `(0, 0)` to `(|a|, |b|)`.
//! 3. [`decorate`] turns each step into a typed [`Edit`].
//! 4. [`remove_corners`] folds adjacent `Add`/`Delete` pairs into substitutions.
//!
//! Inputs are slices of raw code units (bytes for file input). Nothing is
//! shared between calls, so every function here is safe to call from many
//! threads at once.

pub mod decorate;
pub mod matrix;
pub mod path;
pub mod simplify;
pub mod stats;


use tracing::{debug, trace};

pub use decorate::{decorate, DecoratedMove, DecoratedPath, Edit, EditOp};
pub use matrix::CostMatrix;
pub use path::{Move, Path};
pub use simplify::remove_corners;
pub use stats::{tally, Tally};

use crate::error::{EditDistError, EditDistResult};

/// Compute the edit distance from `a` to `b` and one edit script achieving it.
///
/// The distance is always `cost[|a|][|b|]`. The script is the decorated search
/// path after corner collapsing, one [`Edit`] per remaining step.
pub fn compute_distance<T: Copy + PartialEq>(
    a: &[T],
    b: &[T],
) -> EditDistResult<(usize, Vec<Edit<T>>)> {
    let cost = CostMatrix::build(a, b);
    debug!(rows = cost.rows(), cols = cost.cols(), "built cost matrix");

    let path = path::search(&cost).ok_or(EditDistError::NoPath {
        rows: cost.rows(),
        cols: cost.cols(),
    })?;
    let decorated = decorate(a, b, &cost, &path)?;
    let simplified = remove_corners(&decorated);

    let distance = cost.distance();
    debug!(distance, edits = simplified.len(), "edit distance computed");
    Ok((distance, simplified.into_edits()))
}

/// Like [`compute_distance`], also tracing the rendered table and paths.
///
/// The renderings are only built when the `trace` level is enabled.
pub fn compute_distance_traced<T: Copy + PartialEq + Into<char>>(
    a: &[T],
    b: &[T],
) -> EditDistResult<(usize, Vec<Edit<T>>)> {
    let cost = CostMatrix::build(a, b);
    trace!("cost matrix:\n{}", cost.render(a, b));

    let path = path::search(&cost).ok_or(EditDistError::NoPath {
        rows: cost.rows(),
        cols: cost.cols(),
    })?;
    let decorated = decorate(a, b, &cost, &path)?;
    trace!("decorated path: {decorated}");
    let simplified = remove_corners(&decorated);
    trace!("simplified path: {simplified}");
    trace!("statistics: {}", tally(simplified.edits()));

    Ok((cost.distance(), simplified.into_edits()))
}

/// The edit distance alone, using two rolling rows instead of the full table.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let mismatch = usize::from(x != y);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + mismatch); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Character error rate of a hypothesis against a reference of
/// `reference_len` units.
///
/// A perfect match is `0.0`. Any difference from an empty reference is `1.0`.
#[allow(clippy::cast_precision_loss)]
pub fn character_error_rate(distance: usize, reference_len: usize) -> f64 {
    if distance == 0 {
        0.0
    } else if reference_len == 0 {
        1.0
    } else {
        distance as f64 / reference_len as f64
    }
}

/// Operation codes joined by commas, e.g. `e,e,s`.
pub fn format_operations<T>(edits: &[Edit<T>]) -> String {
    edits
        .iter()
        .map(|e| e.op.code())
        .collect::<Vec<_>>()
        .join(",")
}

/// The single-letter code for `op`.
pub fn format_operation(op: EditOp) -> String {
    op.code().to_owned()
}
