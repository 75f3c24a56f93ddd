//! Common test helpers for integration tests
//!
//! Provides an isolated source tree on disk for scanning tests.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary source tree
///
/// Each TestTree owns a unique temporary directory which is removed when the
/// TestTree is dropped.
///
/// # Examples
///
/// ```
/// let tree = TestTree::new().unwrap();
/// tree.create_file("pkg/auth.go", "package pkg\n").unwrap();
/// let report = secdoc::scan_directory(tree.root()).unwrap();
/// ```
pub struct TestTree {
    /// Temporary directory (kept alive until drop)
    temp_dir: TempDir,

    /// Root of the source tree inside the temp dir
    root: PathBuf,
}

impl TestTree {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("src-tree");
        fs::create_dir_all(&root)?;

        Ok(Self { temp_dir, root })
    }

    /// Root directory to hand to the scanner
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scratch path outside the scanned tree (for report output)
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Create a file in the tree
    ///
    /// # Arguments
    ///
    /// * `relative_path` - Path relative to root (e.g., "main.go", "pkg/auth.go")
    /// * `content` - File content
    pub fn create_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.root.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create a Go file whose only content is one comment block above a function
    pub fn create_go_block(&self, relative_path: &str, comment_lines: &[&str]) -> Result<PathBuf> {
        let mut content = String::from("package fixture\n\n");
        for line in comment_lines {
            content.push_str("// ");
            content.push_str(line);
            content.push('\n');
        }
        content.push_str("func Annotated() {}\n");
        self.create_file(relative_path, &content)
    }
}

/// Go source with several annotated declarations, used by ordering tests
pub const MULTI_BLOCK_GO: &str = r#"package payments

// @security-control SC-10
// @description: Tokenizes card numbers before storage
// @references: PCI-DSS 3.4
func Tokenize(pan string) string { return pan }

// @requirement REQ-20
// @description: Refunds are idempotent
// @verification: integration-tested
// @stakeholder: finance
func Refund(id string) error { return nil }

// Ordinary documentation without any directive.
func helper() {}

/*
@security-control SC-11
@verification: pen-tested
*/
func Authorize() {}
"#;
