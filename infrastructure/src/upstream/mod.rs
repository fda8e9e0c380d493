//! Upstream API adapters
//!
//! Implementations of the application's `TrainingDataSource` and
//! `ReportSource` ports over HTTP.

mod http;

pub use http::{DEFAULT_USER_AGENT, HttpReportSource, HttpTrainingSource, parse_training_payload};
