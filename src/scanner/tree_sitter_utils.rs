//! Tree-Sitter comment extraction
//!
//! Parses source into a syntax tree, rejects trees containing syntax errors,
//! and folds the comment nodes into comment groups with flattened text.
//! Supports Go, Python, JavaScript, and TypeScript.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::error::ScanError;
use crate::models::Position;
use crate::scanner::constants::{
    COMMENT_NODE_KIND, GO_IMPORT_DECLARATION, GO_PACKAGE_CLAUSE, GO_TOP_LEVEL_KINDS,
};
use crate::scanner::Language;

/// Tool directives such as `//go:generate`, `//line`, `//export`, `//nolint:all`
static TOOL_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:line |extern |export |[a-z0-9]+:[a-z0-9])").expect("valid directive pattern")
});

/// A maximal run of adjacent comments attached to one source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    /// Comment text with markers removed, one source line per text line
    pub text: String,
    /// Location of the first comment in the group
    pub position: Position,
    /// Last line covered by the group (1-based)
    pub end_line: usize,
    /// Number of comment nodes folded into the group
    pub comment_count: usize,
}

/// One comment node, detached from the tree
#[derive(Debug)]
struct RawComment<'a> {
    text: Cow<'a, str>,
    start_byte: usize,
    end_byte: usize,
    start_row: usize,
    start_column: usize,
    end_row: usize,
}

struct PendingGroup<'a> {
    comments: Vec<RawComment<'a>>,
    /// First comment shares its line with code
    trailing: bool,
}

/// Comment parser for multiple languages
pub struct CodeParser {
    go_language: tree_sitter::Language,
    python_language: tree_sitter::Language,
    javascript_language: tree_sitter::Language,
    typescript_language: tree_sitter::Language,
    tsx_language: tree_sitter::Language,
}

impl CodeParser {
    /// Create a new CodeParser
    ///
    /// # Returns
    /// * `Ok(CodeParser)` with every grammar loaded
    /// * `Err(ScanError::Grammar)` if tree-sitter rejects a grammar
    pub fn new() -> Result<Self, ScanError> {
        let parser = Self {
            go_language: tree_sitter_go::language(),
            python_language: tree_sitter_python::language(),
            javascript_language: tree_sitter_javascript::language(),
            typescript_language: tree_sitter_typescript::language_typescript(),
            tsx_language: tree_sitter_typescript::language_tsx(),
        };

        let mut probe = Parser::new();
        for (name, grammar) in [
            ("go", &parser.go_language),
            ("python", &parser.python_language),
            ("javascript", &parser.javascript_language),
            ("typescript", &parser.typescript_language),
            ("tsx", &parser.tsx_language),
        ] {
            probe
                .set_language(grammar)
                .map_err(|source| ScanError::Grammar { language: name, source })?;
        }

        Ok(parser)
    }

    /// Grammar for a language; `.tsx` files need the TSX dialect
    fn grammar(&self, language: Language, path: &Path) -> &tree_sitter::Language {
        match language {
            Language::Go => &self.go_language,
            Language::Python => &self.python_language,
            Language::JavaScript => &self.javascript_language,
            Language::TypeScript => {
                if path.extension().and_then(|e| e.to_str()) == Some("tsx") {
                    &self.tsx_language
                } else {
                    &self.typescript_language
                }
            }
        }
    }

    /// Parse source and return its comment groups in source order
    ///
    /// # Arguments
    /// * `source` - Raw file contents
    /// * `language` - Language used to pick the grammar
    /// * `path` - Origin of the source, recorded in every group position
    ///
    /// # Returns
    /// * `Ok(groups)` for syntactically valid source
    /// * `Err(ScanError::Syntax)` pointing at the first error node otherwise
    pub fn comment_groups(
        &self,
        source: &[u8],
        language: Language,
        path: &Path,
    ) -> Result<Vec<CommentGroup>, ScanError> {
        let mut parser = Parser::new();
        parser
            .set_language(self.grammar(language, path))
            .map_err(|source| ScanError::Grammar {
                language: language.name(),
                source,
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| ScanError::Syntax {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = Self::first_error(root)
                .map(|node| (node.start_position().row + 1, node.start_position().column + 1))
                .unwrap_or((1, 1));
            return Err(ScanError::Syntax {
                path: path.to_path_buf(),
                line,
                column,
            });
        }

        if language == Language::Go {
            if let Err((line, column)) = Self::check_go_layout(root) {
                return Err(ScanError::Syntax {
                    path: path.to_path_buf(),
                    line,
                    column,
                });
            }
        }

        let mut comments = Vec::new();
        Self::collect_comments(root, source, &mut comments);

        let filename = path.display().to_string();
        let groups = Self::group_comments(comments, source)
            .into_iter()
            .map(|group| Self::finish_group(group, language, &filename))
            .collect();

        Ok(groups)
    }

    /// Depth-first search for the first ERROR or MISSING node
    fn first_error(node: Node) -> Option<Node> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }

        for i in 0..node.child_count() {
            if let Some(found) = node.child(i).and_then(Self::first_error) {
                return Some(found);
            }
        }

        None
    }

    /// Enforce the Go file layout the grammar leaves open
    ///
    /// A Go file starts with exactly one package clause, then imports, then
    /// declarations. Statements are not allowed at the top level. Returns the
    /// 1-based location of the first offending node.
    fn check_go_layout(root: Node) -> Result<(), (usize, usize)> {
        let location = |node: Node| (node.start_position().row + 1, node.start_position().column + 1);

        let mut cursor = root.walk();
        let mut seen_package = false;
        let mut seen_declaration = false;

        for child in root.named_children(&mut cursor) {
            let kind = child.kind();
            if kind == COMMENT_NODE_KIND {
                continue;
            }
            if !GO_TOP_LEVEL_KINDS.contains(&kind) {
                return Err(location(child));
            }

            match kind {
                GO_PACKAGE_CLAUSE if !seen_package => seen_package = true,
                GO_PACKAGE_CLAUSE => return Err(location(child)),
                _ if !seen_package => return Err(location(child)),
                GO_IMPORT_DECLARATION if seen_declaration => return Err(location(child)),
                GO_IMPORT_DECLARATION => {}
                _ => seen_declaration = true,
            }
        }

        if seen_package {
            Ok(())
        } else {
            // Empty or comment-only file: the package clause is expected at EOF
            let end = root.end_position();
            Err((end.row + 1, end.column + 1))
        }
    }

    /// Recursively gather comment nodes in source order
    fn collect_comments<'a>(node: Node, source: &'a [u8], out: &mut Vec<RawComment<'a>>) {
        if node.kind() == COMMENT_NODE_KIND {
            out.push(RawComment {
                text: String::from_utf8_lossy(&source[node.start_byte()..node.end_byte()]),
                start_byte: node.start_byte(),
                end_byte: node.end_byte(),
                start_row: node.start_position().row,
                start_column: node.start_position().column,
                end_row: node.end_position().row,
            });
            return;
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                Self::collect_comments(child, source, out);
            }
        }
    }

    /// Fold adjacent comments into groups
    ///
    /// A comment joins the current group when only whitespace separates it
    /// from the previous one and it starts at most one line further down.
    /// Groups that open after code on the same line only take comments from
    /// that line.
    fn group_comments<'a>(comments: Vec<RawComment<'a>>, source: &[u8]) -> Vec<PendingGroup<'a>> {
        let mut groups: Vec<PendingGroup<'a>> = Vec::new();

        for comment in comments {
            let joins = groups.last().is_some_and(|group| {
                let Some(prev) = group.comments.last() else {
                    return false;
                };
                let max_gap = if group.trailing { 0 } else { 1 };
                comment.start_row <= prev.end_row + max_gap
                    && source[prev.end_byte..comment.start_byte]
                        .iter()
                        .all(u8::is_ascii_whitespace)
            });

            if joins {
                if let Some(group) = groups.last_mut() {
                    group.comments.push(comment);
                }
            } else {
                let trailing = Self::follows_code(source, comment.start_byte);
                groups.push(PendingGroup {
                    comments: vec![comment],
                    trailing,
                });
            }
        }

        groups
    }

    /// True when non-whitespace precedes `start` on its line
    fn follows_code(source: &[u8], start: usize) -> bool {
        let line_start = source[..start]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        !source[line_start..start].iter().all(u8::is_ascii_whitespace)
    }

    fn finish_group(group: PendingGroup<'_>, language: Language, filename: &str) -> CommentGroup {
        let first = &group.comments[0];
        let last = &group.comments[group.comments.len() - 1];

        CommentGroup {
            text: comment_text(&group.comments, language),
            position: Position::new(filename, first.start_byte, first.start_row + 1, first.start_column + 1),
            end_line: last.end_row + 1,
            comment_count: group.comments.len(),
        }
    }
}

/// Flatten a comment group into plain text
///
/// Comment markers go, tool directives are dropped, trailing whitespace is
/// stripped, leading and trailing blank lines are removed and blank runs
/// collapse to one. Non-empty text ends with a newline.
fn comment_text(comments: &[RawComment<'_>], language: Language) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for comment in comments {
        let raw = comment.text.as_ref();
        let is_block = raw.starts_with("/*");

        let body = if let Some(rest) = raw.strip_prefix("//") {
            match rest.strip_prefix(' ') {
                Some(spaced) => spaced,
                None if TOOL_DIRECTIVE.is_match(rest) => continue,
                None => rest,
            }
        } else if let Some(rest) = raw.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else if let Some(rest) = raw.strip_prefix('#') {
            rest.strip_prefix(' ').unwrap_or(rest)
        } else {
            raw
        };

        for line in body.split('\n') {
            let line = if is_block && language.decorates_block_comments() {
                strip_block_decoration(line)
            } else {
                line
            };
            lines.push(line.trim_end());
        }
    }

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        if !line.is_empty() || kept.last().is_some_and(|prev| !prev.is_empty()) {
            kept.push(line);
        }
    }
    if kept.last().is_some_and(|last| !last.is_empty()) {
        kept.push("");
    }

    kept.join("\n")
}

/// Drop a JSDoc-style leading `*` and the space after it
fn strip_block_decoration(line: &str) -> &str {
    match line.trim_start().strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}
