//! `editdist` — Levenshtein edit distance with a readable edit script.
//!
//! Computes the minimum number of single-unit insertions, deletions and
//! substitutions between two sequences, and reconstructs one concrete script
//! of edits achieving it.
//!
//! # Pipeline
//!
//! ```text
//! (a, b) → CostMatrix → Path → DecoratedPath → remove_corners → (distance, edits)
//!                                                                      ↓
//!                                                          tally / Report
//! ```
//!
//! # Example
//!
//! ```
//! use editdist::{compute_distance, format_operations, tally};
//!
//! let (dist, edits) = compute_distance(b"kitten", b"sitting")?;
//! assert_eq!(dist, 3);
//! assert_eq!(format_operations(&edits), "s,e,e,e,s,e,a");
//! assert_eq!(tally(&edits).to_string(), "a:1, d:0, s:2, e:4");
//! # Ok::<(), editdist::EditDistError>(())
//! ```

pub mod distance;
pub mod error;
pub mod report;
pub mod source;

pub use distance::{
    character_error_rate, compute_distance, format_operation, format_operations, tally, Edit,
    EditOp, Tally,
};
pub use error::{EditDistError, EditDistResult};
pub use report::Report;
