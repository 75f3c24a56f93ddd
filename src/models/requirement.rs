use serde::{Deserialize, Serialize};

use super::Position;

/// A `@requirement` annotation lifted out of a source comment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    pub requirement_id: String,
    pub description: String,
    pub verification: String,
    pub stakeholder: String,
    pub file_path: String,
    pub position: Position,
}

impl Requirement {
    pub fn located(file_path: impl Into<String>, position: Position) -> Self {
        Self {
            file_path: file_path.into(),
            position,
            ..Self::default()
        }
    }
}
