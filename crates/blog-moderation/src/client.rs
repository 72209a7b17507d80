//! HTTP moderation client

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use blog_common::{AppError, ModerationConfig};
use blog_core::{ContentClassifier, DomainError, ModerationVerdict};

use crate::wire::{verdict_from_response, ModerationRequest, ModerationResponse};

/// Client for the external content-classification endpoint.
///
/// One synchronous (from the caller's perspective) request per
/// classification; the configured timeout bounds how long a hanging upstream
/// can stall a comment submission.
#[derive(Clone)]
pub struct ModerationClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ModerationClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn from_config(config: &ModerationConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ContentClassifier for ModerationClient {
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    async fn classify(&self, content: &str) -> Result<ModerationVerdict, DomainError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ModerationRequest { input: content })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Moderation request timed out");
                    DomainError::ModerationTimeout
                } else {
                    warn!(error = %e, "Moderation request failed");
                    DomainError::ModerationUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Moderation service returned an error status");
            return Err(DomainError::ModerationUnavailable(format!(
                "unexpected status {status}"
            )));
        }

        let body: ModerationResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Moderation response could not be decoded");
            DomainError::ModerationUnavailable(format!("malformed response: {e}"))
        })?;

        let verdict = verdict_from_response(body)?;
        debug!(flagged = verdict.flagged, "Moderation verdict received");
        Ok(verdict)
    }
}

impl std::fmt::Debug for ModerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
