use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::models::{MatchRequest, MatchResponse, ResumeRequest, ResumeResponse};

/// Failures when calling the external matching API
///
/// Three classes, surfaced to the HTTP caller as one generic failure:
/// transport errors, non-success HTTP statuses, and bodies whose status
/// field is not "success". None are retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to matching API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("matching API returned {0}")]
    Status(reqwest::StatusCode),

    #[error("matching API reported failure: {0}")]
    Application(String),
}

/// Client for the external matching API
///
/// Used when the service proxies instead of generating locally. Covers
/// the three endpoints the demo client calls: health probe, match query
/// and resume submission.
pub struct UpstreamClient {
    base_url: String,
    client: Client,
}

impl UpstreamClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probe the upstream health endpoint; any failure reads as unhealthy
    pub async fn check_health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Upstream health probe failed: {}", e);
                false
            }
        }
    }

    /// Submit a match query upstream
    pub async fn post_match(&self, request: &MatchRequest) -> Result<MatchResponse, UpstreamError> {
        let url = self.url("/match");
        tracing::debug!("Proxying match query to: {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let body: MatchResponse = response.json().await?;
        if body.status != "success" {
            return Err(UpstreamError::Application(body.status));
        }

        Ok(body)
    }

    /// Submit a resume upstream
    pub async fn post_resume(
        &self,
        submission: &ResumeRequest,
    ) -> Result<ResumeResponse, UpstreamError> {
        let url = self.url("/resume");
        tracing::debug!("Submitting resume to: {}", url);

        let response = self.client.post(&url).json(submission).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let body: ResumeResponse = response.json().await?;
        if body.status != "success" {
            return Err(UpstreamError::Application(body.status));
        }

        Ok(body)
    }
}
