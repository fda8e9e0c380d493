//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_data;
pub mod import_reports;
pub mod inspect_edit;
pub mod next_edit;
pub mod reconcile_training;
pub(crate) mod shared;
pub mod statistics;
pub mod submit_vote;
