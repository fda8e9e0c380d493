//! Application layer for reviewng
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{ImportParams, ReconcileParams};
pub use error::ReviewError;
pub use ports::{
    progress::{NoReconcileProgress, ReconcileProgressNotifier},
    review_store::{ReviewStore, StoreError},
    upstream::{ReportSource, SourceError, TrainingDataSource},
};
pub use use_cases::export_data::ExportDataUseCase;
pub use use_cases::import_reports::{ImportReportsUseCase, ImportSummary};
pub use use_cases::inspect_edit::{EditDetails, InspectEditUseCase};
pub use use_cases::next_edit::NextEditUseCase;
pub use use_cases::reconcile_training::{ReconcileReport, ReconcileTrainingUseCase};
pub use use_cases::statistics::StatisticsUseCase;
pub use use_cases::submit_vote::{SubmitVoteInput, SubmitVoteOutcome, SubmitVoteUseCase};
