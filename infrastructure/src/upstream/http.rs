//! HTTP adapters for the upstream training-data and report APIs

use async_trait::async_trait;
use reviewng_application::{ReportSource, SourceError, TrainingDataSource};
use reviewng_domain::{EditId, TrainingPayload};
use std::time::Duration;
use tracing::debug;

/// Maximum response body size (20 MB); training payloads carry full page text
const MAX_BODY_SIZE: usize = 20 * 1024 * 1024;

/// Default User-Agent for upstream requests
pub const DEFAULT_USER_AGENT: &str = "ClueBot NG Review NG/1.0";

fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| SourceError::RequestFailed(format!("failed to build HTTP client: {e}")))
}

fn map_request_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::RequestFailed(e.to_string())
    }
}

/// GET `url` and return the body, mapping non-2xx statuses to errors
async fn get_body(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, SourceError> {
    let response = client.get(url).send().await.map_err(map_request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    if response.content_length().unwrap_or(0) > MAX_BODY_SIZE as u64 {
        return Err(SourceError::Malformed("response too large".to_string()));
    }

    let body = response.bytes().await.map_err(map_request_error)?;
    if body.len() > MAX_BODY_SIZE {
        return Err(SourceError::Malformed(format!(
            "response too large: {} bytes",
            body.len()
        )));
    }
    Ok(body.to_vec())
}

/// Training-data source backed by the upstream API
pub struct HttpTrainingSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTrainingSource {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(user_agent, timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Request URL for one revision's training data
    pub fn training_url(&self, edit: EditId) -> String {
        format!(
            "{}?action=training.data&include_text=1&rev_id={}",
            self.base_url, edit
        )
    }
}

/// Decode a training payload. A body without `current` or `page` is malformed.
pub fn parse_training_payload(body: &[u8]) -> Result<TrainingPayload, SourceError> {
    serde_json::from_slice(body).map_err(|e| SourceError::Malformed(e.to_string()))
}

#[async_trait]
impl TrainingDataSource for HttpTrainingSource {
    async fn fetch(&self, edit: EditId) -> Result<TrainingPayload, SourceError> {
        let url = self.training_url(edit);
        debug!("Fetching training data: {}", url);
        let body = get_body(&self.client, &url).await?;
        parse_training_payload(&body)
    }
}

/// Report list source backed by the upstream API
pub struct HttpReportSource {
    client: reqwest::Client,
    url: String,
}

impl HttpReportSource {
    pub fn new(
        url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(user_agent, timeout)?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch_reported(&self) -> Result<String, SourceError> {
        debug!("Fetching report list: {}", self.url);
        let body = get_body(&self.client, &self.url).await?;
        String::from_utf8(body).map_err(|e| SourceError::Malformed(e.to_string()))
    }
}
