use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Requirement, SecurityControl};

/// Records extracted from a single source file, in comment order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFindings {
    pub controls: Vec<SecurityControl>,
    pub requirements: Vec<Requirement>,
}

impl FileFindings {
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty() && self.requirements.is_empty()
    }
}

/// Aggregate result of one scan
///
/// Starts empty and only grows through [`Report::append`]. Both lists keep
/// discovery order: traversal order of files, then comment order within a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub security_controls: Vec<SecurityControl>,
    pub requirements: Vec<Requirement>,
}

/// Counts describing a finished report, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub controls: usize,
    pub requirements: usize,
    /// Files that contributed at least one record
    pub files: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's findings after everything already collected
    pub fn append(&mut self, findings: FileFindings) {
        self.security_controls.extend(findings.controls);
        self.requirements.extend(findings.requirements);
    }

    pub fn is_empty(&self) -> bool {
        self.security_controls.is_empty() && self.requirements.is_empty()
    }

    pub fn summary(&self) -> ReportSummary {
        let files: BTreeSet<&str> = self
            .security_controls
            .iter()
            .map(|c| c.file_path.as_str())
            .chain(self.requirements.iter().map(|r| r.file_path.as_str()))
            .collect();

        ReportSummary {
            controls: self.security_controls.len(),
            requirements: self.requirements.len(),
            files: files.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn control(id: &str, file: &str) -> SecurityControl {
        SecurityControl {
            control_id: id.to_string(),
            ..SecurityControl::located(file, Position::new(file, 0, 1, 1))
        }
    }

    fn requirement(id: &str, file: &str) -> Requirement {
        Requirement {
            requirement_id: id.to_string(),
            ..Requirement::located(file, Position::new(file, 0, 1, 1))
        }
    }

    #[test]
    fn test_empty_report_serializes_empty_arrays() {
        let json = serde_json::to_string(&Report::new()).unwrap();
        assert_eq!(json, r#"{"security_controls":[],"requirements":[]}"#);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut report = Report::new();
        report.append(FileFindings {
            controls: vec![control("SC-1", "a.go"), control("SC-2", "a.go")],
            requirements: vec![requirement("REQ-1", "a.go")],
        });
        report.append(FileFindings {
            controls: vec![control("SC-3", "b.go")],
            requirements: vec![],
        });

        let ids: Vec<&str> = report.security_controls.iter().map(|c| c.control_id.as_str()).collect();
        assert_eq!(ids, vec!["SC-1", "SC-2", "SC-3"]);
        assert_eq!(report.requirements.len(), 1);
    }

    #[test]
    fn test_append_does_not_deduplicate() {
        let mut report = Report::new();
        let findings = FileFindings {
            controls: vec![control("SC-1", "a.go")],
            requirements: vec![],
        };
        report.append(findings.clone());
        report.append(findings);

        assert_eq!(report.security_controls.len(), 2);
    }

    #[test]
    fn test_summary_counts_distinct_files() {
        let mut report = Report::new();
        report.append(FileFindings {
            controls: vec![control("SC-1", "a.go")],
            requirements: vec![requirement("REQ-1", "a.go"), requirement("REQ-2", "b.go")],
        });

        let summary = report.summary();
        assert_eq!(summary.controls, 1);
        assert_eq!(summary.requirements, 2);
        assert_eq!(summary.files, 2);
    }

    #[test]
    fn test_empty_findings() {
        assert!(FileFindings::default().is_empty());
        assert!(Report::new().is_empty());
    }
}
