//! editdist -- Levenshtein distance and edit script between two files.
//!
//! Usage: editdist [OPTIONS] <SOURCE> <TARGET>

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use editdist::distance::{compute_distance_traced, CostMatrix};
use editdist::source::read_sequence;
use editdist::Report;

/// Compute the edit distance between two files and the edits that achieve it.
#[derive(Debug, Parser)]
#[command(about, version, long_about = None)]
struct Cli {
    /// file holding the sequence to transform
    source: PathBuf,

    /// file holding the sequence to transform into, also the reference for --cer
    target: PathBuf,

    /// print the character error rate instead of the distance
    #[arg(long)]
    cer: bool,

    /// print the cost matrix to stderr
    #[arg(long)]
    table: bool,

    /// print the full report as pretty printed json instead of the distance
    #[arg(long, conflicts_with = "cer")]
    json: bool,

    /// also write the json report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// do not print the edit summary to stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let a = read_sequence(&cli.source)?;
    let b = read_sequence(&cli.target)?;

    let start = Instant::now();
    let (distance, edits) = compute_distance_traced(&a, &b)
        .with_context(|| format!("comparing {} to {}", cli.source.display(), cli.target.display()))?;
    let elapsed = start.elapsed();
    tracing::info!(distance, edits = edits.len(), ?elapsed, "comparison finished");

    let report = Report::new(&cli.source, &cli.target, b.len(), distance, &edits, elapsed);

    if cli.table {
        eprint!("{}", CostMatrix::build(&a, &b).render(&a, &b));
    }
    if !cli.quiet {
        eprintln!("{}", report.summary());
    }
    if let Some(path) = &cli.report {
        report.write_json(path)?;
    }

    if cli.json {
        println!("{}", report.to_json()?);
    } else if cli.cer {
        println!("{:.5}", report.cer);
    } else {
        println!("{distance}");
    }
    Ok(())
}
