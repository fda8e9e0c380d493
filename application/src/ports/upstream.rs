//! Upstream source ports
//!
//! Interfaces to the external API that provides training payloads for
//! revisions and the list of revisions reported for review.

use async_trait::async_trait;
use reviewng_domain::{EditId, TrainingPayload};
use thiserror::Error;

/// Errors raised by an upstream source. All of them are recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Timeout")]
    Timeout,
}

/// Source of training payloads
#[async_trait]
pub trait TrainingDataSource: Send + Sync {
    /// Fetch the training payload for a revision
    async fn fetch(&self, edit: EditId) -> Result<TrainingPayload, SourceError>;
}

/// Source of revisions reported through the report interface
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the raw report list: one revision id per line
    async fn fetch_reported(&self) -> Result<String, SourceError>;
}
