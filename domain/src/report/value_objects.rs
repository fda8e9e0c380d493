//! Read-side report values: statistics and data dumps.
//!
//! These are plain values built by the application layer. They carry no
//! formatting concerns; presentation decides how to render them.

use crate::core::ids::{EditId, GroupId, UserId};
use serde::{Deserialize, Serialize};

/// Contribution totals for one reviewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContributionStat {
    pub username: String,
    pub admin: bool,
    /// Live votes plus legacy carry-over
    pub edit_count: u64,
    /// Votes on edits settled as constructive or vandalism
    pub accuracy_count: u32,
    /// `None` when `accuracy_count` is zero
    pub accuracy_percentage: Option<f64>,
}

/// Status buckets for one edit group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditGroupStat {
    pub name: String,
    pub weight: i32,
    pub not_started: u32,
    pub partial: u32,
    pub done: u32,
}

impl EditGroupStat {
    pub fn total(&self) -> u32 {
        self.not_started + self.partial + self.done
    }
}

/// Combined statistics report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub groups: Vec<EditGroupStat>,
    pub users: Vec<UserContributionStat>,
}

/// Which edits a data dump covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DumpScope {
    /// Every edit, reviewed subset, done subset and users
    All,
    /// Only edits with a settled classification, no users
    DoneOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpEdit {
    pub id: EditId,
    pub weight: i32,
    pub required: u32,
    pub constructive: u32,
    pub skipped: u32,
    pub vandalism: u32,
    /// Administrative classification code (`U`/`C`/`V`/`S`)
    pub original_classification: String,
    /// Consensus classification code (`U`/`C`/`V`/`S`)
    pub real_classification: String,
    pub comments: Vec<String>,
    pub users: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpGroup {
    pub id: GroupId,
    pub name: String,
    pub weight: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edits: Vec<DumpEdit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewed: Vec<DumpEdit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub done: Vec<DumpEdit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpUser {
    pub id: UserId,
    pub nick: String,
    pub classifications: u64,
}

/// Full export of groups, edits and (optionally) users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDump {
    pub edit_groups: Vec<DumpGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<DumpUser>,
}
