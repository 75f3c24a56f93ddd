//! Recursive directory scan
//!
//! Visits every entry under a root in file-name order, depth first, and
//! feeds matching source files to the [`FileScanner`]. The first traversal or
//! file error aborts the walk and no partial report is returned.

use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::models::{Report, ScanSettings};
use crate::scanner::file_scanner::FileScanner;
use crate::scanner::Language;

/// Scan `root` for Go sources with default settings
pub fn scan_directory(root: impl AsRef<Path>) -> Result<Report, ScanError> {
    scan_directory_with(root, &ScanSettings::default())
}

/// Scan `root`, visiting files of the languages enabled in `settings`
///
/// # Returns
/// * `Ok(report)` holding every record in discovery order
/// * `Err(ScanError::Walk)` if a directory or entry cannot be read
/// * `Err(ScanError::Read | ScanError::Syntax)` if a source file fails
pub fn scan_directory_with(root: impl AsRef<Path>, settings: &ScanSettings) -> Result<Report, ScanError> {
    let root = root.as_ref();
    let scanner = FileScanner::new()?;
    let mut report = Report::new();
    let mut files_scanned = 0usize;

    info!(root = %root.display(), languages = ?settings.languages, "starting scan");

    for entry in WalkDir::new(root).follow_root_links(false).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(language) = Language::detect(entry.path()) else {
            continue;
        };
        if !settings.is_enabled(language) {
            debug!(file = %entry.path().display(), language = %language, "language not enabled, skipping");
            continue;
        }

        let findings = scanner.scan_file_as(entry.path(), language)?;
        report.append(findings);
        files_scanned += 1;
    }

    let summary = report.summary();
    info!(
        root = %root.display(),
        files_scanned,
        files_with_annotations = summary.files,
        controls = summary.controls,
        requirements = summary.requirements,
        "scan complete"
    );

    Ok(report)
}
