//! Single-file annotation scanner
//!
//! Reads one source file, splits it into comment groups, and runs the
//! directive parser over every group that mentions a directive tag.

use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::error::ScanError;
use crate::models::FileFindings;
use crate::scanner::directive_parser::{parse_directive, Directive, DirectiveKind};
use crate::scanner::tree_sitter_utils::{CodeParser, CommentGroup};
use crate::scanner::Language;

/// Scans source files for `@security-control` and `@requirement` blocks
pub struct FileScanner {
    parser: CodeParser,
}

impl FileScanner {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self {
            parser: CodeParser::new()?,
        })
    }

    /// Scan a file, picking the grammar from its extension
    ///
    /// # Returns
    /// * `Ok(findings)` with records in comment order
    /// * `Err(ScanError::UnsupportedFile)` for an unknown extension
    /// * `Err(ScanError::Read | ScanError::Syntax)` with the path attached
    pub fn scan_file(&self, path: &Path) -> Result<FileFindings, ScanError> {
        let language = Language::detect(path).ok_or_else(|| ScanError::UnsupportedFile(path.to_path_buf()))?;
        self.scan_file_as(path, language)
    }

    /// Scan a file with an explicit language
    pub fn scan_file_as(&self, path: &Path, language: Language) -> Result<FileFindings, ScanError> {
        let source = fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.scan_source(&source, path, language)
    }

    /// Scan an in-memory buffer as if it had been read from `path`
    pub fn scan_source(&self, source: &[u8], path: &Path, language: Language) -> Result<FileFindings, ScanError> {
        let groups = self.parser.comment_groups(source, language, path)?;
        let file_path = path.display().to_string();

        let findings = extract_findings(&groups, &file_path);
        debug!(
            file = %file_path,
            language = %language,
            comment_groups = groups.len(),
            controls = findings.controls.len(),
            requirements = findings.requirements.len(),
            "scanned file"
        );

        Ok(findings)
    }
}

/// Run the directive parser over every comment group
///
/// The two tag checks are independent: one group can contribute a control
/// and a requirement.
pub fn extract_findings(groups: &[CommentGroup], file_path: &str) -> FileFindings {
    let mut findings = FileFindings::default();

    for group in groups {
        for kind in DirectiveKind::ALL {
            if !group.text.contains(kind.tag()) {
                continue;
            }

            match parse_directive(kind, &group.text, file_path, &group.position) {
                Some(Directive::Control(control)) => findings.controls.push(control),
                Some(Directive::Requirement(requirement)) => findings.requirements.push(requirement),
                None => trace!(
                    file = %file_path,
                    line = group.position.line,
                    tag = kind.tag(),
                    "tag mentioned without an identifier"
                ),
            }
        }
    }

    findings
}
