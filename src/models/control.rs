use serde::{Deserialize, Serialize};

use super::Position;

/// A `@security-control` annotation lifted out of a source comment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityControl {
    pub control_id: String,
    pub description: String,
    pub references: String,
    pub verification: String,
    pub file_path: String,
    pub position: Position,
}

impl SecurityControl {
    /// Empty control anchored at a source location; fields are filled by the directive parser
    pub fn located(file_path: impl Into<String>, position: Position) -> Self {
        Self {
            file_path: file_path.into(),
            position,
            ..Self::default()
        }
    }
}
