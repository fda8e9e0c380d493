//! Training data cached for settled edits.
//!
//! The payload mirrors what the upstream training API returns for a revision.
//! `current` and `page` must be present; a response without them is treated
//! as malformed. Individual fields default when missing.

use crate::core::ids::EditId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionAuthor {
    pub name: String,
    pub edit_count: i64,
    pub distinct_pages_count: i64,
    pub warning_count: i64,
    pub registration_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision {
    pub id: i64,
    pub comment: String,
    pub user: RevisionAuthor,
    pub minor: bool,
    pub timestamp: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub title: String,
    pub namespace: String,
    pub creator: String,
    pub creation_time: i64,
    pub recent_edit_count: i64,
    pub recent_reversion_count: i64,
}

/// Raw payload returned by the training-data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPayload {
    pub current: Revision,
    #[serde(default)]
    pub previous: Revision,
    pub page: PageInfo,
}

/// Cached training data for one edit, tagged with the settled verdict at the
/// time it was fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingData {
    pub edit_id: EditId,
    #[serde(flatten)]
    pub payload: TrainingPayload,
    pub is_vandalism: bool,
}

impl TrainingData {
    pub fn new(edit_id: EditId, payload: TrainingPayload, is_vandalism: bool) -> Self {
        Self {
            edit_id,
            payload,
            is_vandalism,
        }
    }
}
