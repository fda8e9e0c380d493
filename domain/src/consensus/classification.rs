//! Classification values shared by votes, edits and consensus results.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A verdict on an edit.
///
/// Used both for a single reviewer's vote and for the settled consensus of an
/// edit. `Unknown` is never cast as a vote; it only appears as a consensus
/// result (or as an administrative classification that has not been set).
///
/// # Example
///
/// ```
/// use reviewng_domain::Classification;
///
/// let c: Classification = "vandalism".parse().unwrap();
/// assert_eq!(c, Classification::Vandalism);
/// assert_eq!(c.code(), "V");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No verdict (yet)
    #[default]
    Unknown,
    /// The edit is a good-faith contribution
    Constructive,
    /// The edit is vandalism
    Vandalism,
    /// The reviewer declined to judge the edit
    Skip,
}

impl Classification {
    /// Stable integer code used by the storage layer.
    pub fn as_i32(&self) -> i32 {
        match self {
            Classification::Unknown => 0,
            Classification::Vandalism => 1,
            Classification::Constructive => 2,
            Classification::Skip => 3,
        }
    }

    /// Inverse of [`as_i32`](Self::as_i32).
    pub fn from_i32(value: i32) -> Result<Self, DomainError> {
        match value {
            0 => Ok(Classification::Unknown),
            1 => Ok(Classification::Vandalism),
            2 => Ok(Classification::Constructive),
            3 => Ok(Classification::Skip),
            other => Err(DomainError::InvalidClassification(other.to_string())),
        }
    }

    /// Single-letter code used in data exports (`U`, `C`, `V`, `S`).
    pub fn code(&self) -> &'static str {
        match self {
            Classification::Unknown => "U",
            Classification::Constructive => "C",
            Classification::Vandalism => "V",
            Classification::Skip => "S",
        }
    }

    /// Whether this value can be cast as a reviewer vote.
    pub fn is_votable(&self) -> bool {
        !matches!(self, Classification::Unknown)
    }

    /// Whether this is a real verdict a reviewer can be scored against.
    pub fn is_scorable(&self) -> bool {
        matches!(
            self,
            Classification::Constructive | Classification::Vandalism
        )
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Classification::Unknown)
    }

    pub fn is_vandalism(&self) -> bool {
        matches!(self, Classification::Vandalism)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Unknown => write!(f, "Unknown"),
            Classification::Constructive => write!(f, "Constructive"),
            Classification::Vandalism => write!(f, "Vandalism"),
            Classification::Skip => write!(f, "Skipped"),
        }
    }
}

impl std::str::FromStr for Classification {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "unknown" => Ok(Classification::Unknown),
            "c" | "constructive" => Ok(Classification::Constructive),
            "v" | "vandalism" => Ok(Classification::Vandalism),
            "s" | "skip" | "skipped" => Ok(Classification::Skip),
            _ => Err(DomainError::InvalidClassification(s.to_string())),
        }
    }
}
