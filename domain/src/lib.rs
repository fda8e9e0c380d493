//! Domain layer for reviewng
//!
//! This crate contains the entities, value objects and the consensus rule.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Votes
//!
//! Reviewers independently classify historical edits as constructive,
//! vandalism or skip. Each (reviewer, edit) pair carries at most one vote.
//!
//! ## Consensus
//!
//! The votes for an edit are tallied and reduced to a status
//! (not started / partial / done) and a settled classification by
//! [`calculate_status`] and [`calculate_classification`]. Nothing else in
//! the workspace derives a classification from votes.

pub mod consensus;
pub mod core;
pub mod edit;
pub mod report;
pub mod training;
pub mod user;
pub mod vote;

// Re-export commonly used types
pub use consensus::{
    Classification, EditStatus, VoteTally, calculate_classification, calculate_status,
};
pub use core::{
    error::DomainError,
    ids::{EditId, GroupId, UserId, VoteId},
};
pub use edit::{Edit, EditGroup, EditReview};
pub use report::{
    DataDump, DumpEdit, DumpGroup, DumpScope, DumpUser, EditGroupStat, StatisticsReport,
    UserContributionStat,
};
pub use training::{TrainingData, TrainingPayload};
pub use user::{User, UserAccuracy};
pub use vote::{NewVote, UserClassification, tally_votes};
