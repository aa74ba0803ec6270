//! Result presentation: the text summary and the JSON report.
//!
//! A [`Report`] is built once from a finished computation and is then only
//! rendered. The JSON form can be written to disk atomically via a temp file
//! in the target directory followed by a rename.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::distance::{character_error_rate, format_operations, tally, Edit, EditOp, Tally};
use crate::error::EditDistResult;

/// One edit as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEdit {
    pub unit: String,
    pub op: EditOp,
}

/// Everything printed or saved about one comparison.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub target: String,
    pub distance: usize,
    /// Character error rate against the target.
    pub cer: f64,
    /// Operation codes joined by commas.
    pub operations: String,
    pub statistics: Tally,
    pub edits: Vec<ReportEdit>,
    pub elapsed_ms: f64,
}

impl Report {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        source: &Path,
        target: &Path,
        target_len: usize,
        distance: usize,
        edits: &[Edit<u8>],
        elapsed: Duration,
    ) -> Self {
        Self {
            source: source.display().to_string(),
            target: target.display().to_string(),
            distance,
            cer: character_error_rate(distance, target_len),
            operations: format_operations(edits),
            statistics: tally(edits),
            edits: edits
                .iter()
                .map(|e| ReportEdit {
                    unit: char::from(e.unit).to_string(),
                    op: e.op,
                })
                .collect(),
            elapsed_ms: elapsed.as_micros() as f64 / 1000.0,
        }
    }

    /// The stderr summary: operation codes, then timing and statistics.
    pub fn summary(&self) -> String {
        format!(
            "{}\n\nElapsed Time: {:.3}ms\nStatistics: {}\n",
            self.operations, self.elapsed_ms, self.statistics
        )
    }

    pub fn to_json(&self) -> EditDistResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Atomically write the JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.write_all(b"\n"))
            .with_context(|| format!("failed to write report for {}", path.display()))?;
        tmp.persist(path)
            .with_context(|| format!("failed to save report to {}", path.display()))?;

        tracing::info!(path = %path.display(), "report written");
        Ok(())
    }
}
