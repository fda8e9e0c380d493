//! Review progress of an edit

use serde::{Deserialize, Serialize};

/// How far an edit has progressed towards its required vote count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditStatus {
    /// No votes have been cast
    NotStarted,
    /// Some votes, but no class has reached `required`
    Partial,
    /// At least one class has reached `required`
    Done,
}

impl EditStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, EditStatus::Done)
    }
}

impl std::fmt::Display for EditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditStatus::NotStarted => write!(f, "Not started"),
            EditStatus::Partial => write!(f, "Partial"),
            EditStatus::Done => write!(f, "Done"),
        }
    }
}
