//! Scan command
//!
//! Runs a directory scan and persists the report as pretty-printed JSON.
//! The report is fully built in memory before anything is written, so a
//! failed scan never leaves a partial file behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Report, ScanSettings};
use crate::scanner::scan_directory_with;

/// Where a finished report went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    File(PathBuf),
    Stdout,
}

/// Serialize a report with two-space indentation
pub fn render_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Error marshaling JSON")
}

/// Write a rendered report to `path`
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = render_report(report)?;
    fs::write(path, json).with_context(|| format!("Error writing output file {}", path.display()))
}

/// Scan `source_dir` and deliver the report according to `settings`
///
/// # Errors
/// Returns error if the scan fails, or if the report cannot be serialized or written
pub fn run_scan(source_dir: &Path, settings: &ScanSettings) -> Result<ReportDestination> {
    let report = scan_directory_with(source_dir, settings)
        .with_context(|| format!("Error parsing directory {}", source_dir.display()))?;

    if settings.to_stdout {
        let json = render_report(&report)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json).context("Error writing report to stdout")?;
        return Ok(ReportDestination::Stdout);
    }

    write_report(&report, &settings.output_path)?;
    info!(path = %settings.output_path.display(), "Report written to {}", settings.output_path.display());

    Ok(ReportDestination::File(settings.output_path.clone()))
}
