use serde::{Deserialize, Serialize};

/// Source location of an annotation
///
/// Provenance only. Serialized with capitalized keys
/// (`Filename`, `Offset`, `Line`, `Column`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub filename: String,
    /// Byte offset, 0-based
    pub offset: usize,
    /// Line number, 1-based
    pub line: usize,
    /// Byte column, 1-based
    pub column: usize,
}

impl Position {
    pub fn new(filename: impl Into<String>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            offset,
            line,
            column,
        }
    }
}
