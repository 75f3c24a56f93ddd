//! Annotation scanning engine
//!
//! Provides language detection, comment extraction, directive parsing,
//! and the directory walk that ties them into a report.

pub mod constants;
pub mod language;
pub mod directive_parser;
pub mod tree_sitter_utils;
pub mod file_scanner;
pub mod tree_walker;

pub use language::Language;
pub use directive_parser::{parse_annotation, parse_directive, Annotation, Directive, DirectiveKind};
pub use tree_sitter_utils::{CodeParser, CommentGroup};
pub use file_scanner::{extract_findings, FileScanner};
pub use tree_walker::{scan_directory, scan_directory_with};
