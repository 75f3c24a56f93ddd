//! Scan error types
//!
//! Every failure here is fatal to the scan in progress. Missing directive IDs
//! and unknown tags are not errors and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking a tree or scanning a single file
#[derive(Error, Debug)]
pub enum ScanError {
    /// Directory listing or entry stat failed during traversal
    #[error("traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Source file could not be read (missing, unreadable, broken symlink)
    #[error("error parsing {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not syntactically valid for its language
    #[error("error parsing {}: {line}:{column}: syntax error", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    /// Tree-sitter refused the grammar (ABI mismatch)
    #[error("failed to load {language} grammar: {source}")]
    Grammar {
        language: &'static str,
        #[source]
        source: tree_sitter::LanguageError,
    },

    /// File extension does not map to any supported language
    #[error("unsupported source file: {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// Configuration named a language this build cannot parse
    #[error("unknown language '{0}' (expected one of: go, python, javascript, typescript)")]
    UnknownLanguage(String),
}

impl ScanError {
    /// Path of the file that caused the failure, when the error is file-scoped
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScanError::Read { path, .. }
            | ScanError::Syntax { path, .. }
            | ScanError::UnsupportedFile(path) => Some(path),
            ScanError::Walk(err) => err.path(),
            ScanError::Grammar { .. } | ScanError::UnknownLanguage(_) => None,
        }
    }
}
