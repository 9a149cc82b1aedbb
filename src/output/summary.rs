//! End-of-run batch summary: a colored terminal block and an optional JSON
//! file.

use super::ensure_parent_dir;
use crate::errors::{Error, Result};
use crate::pipeline::{ArtifactStatus, BatchReport};
use colored::*;
use std::fmt::Write as _;
use std::path::Path;

pub fn format_summary(report: &BatchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Processed {} of {} directories.",
        "Completed.".green().bold(),
        report.processed_count(),
        report.directories.len()
    );

    for dir in &report.directories {
        if let Some(reason) = &dir.skipped {
            let _ = writeln!(out, "  {} {}: {}", "skipped".yellow(), dir.name, reason);
        } else if let Some(reason) = &dir.degraded {
            let _ = writeln!(
                out,
                "  {} {}: counted without lemmatization ({})",
                "degraded".yellow(),
                dir.name,
                reason
            );
        }
    }

    for (name, artifact) in report.failed_artifacts() {
        if let ArtifactStatus::Failed { error } = &artifact.status {
            let _ = writeln!(
                out,
                "  {} {} ({}): {}",
                "failed".red().bold(),
                artifact.path.display(),
                name,
                error
            );
        }
    }
    out
}

pub fn print_summary(report: &BatchReport) {
    print!("{}", format_summary(report));
}

/// Write the report as pretty JSON to `path`.
pub fn write_summary_json(path: &Path, report: &BatchReport) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path).map_err(|e| Error::file_system(path, e))?;
    serde_json::to_writer_pretty(file, report)?;
    tracing::info!("Wrote batch summary to {}", path.display());
    Ok(())
}
