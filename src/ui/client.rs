use reqwest::Client;
use serde_json::Value;
use crate::errors::PhishGuardError;
use crate::models::EmailSubmission;
use super::view::ResultView;
use tracing::{debug, warn};

/// HTTP client the UI uses to reach the analysis backend.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post a submission and read back whatever result the backend sent,
    /// whatever the status code. Failing to reach the backend or to decode
    /// its body yields the local failure result.
    pub async fn analyze(&self, submission: &EmailSubmission) -> ResultView {
        match self.post_analyze(submission).await {
            Ok(value) => ResultView::from_value(&value),
            Err(e) => {
                warn!(backend = %self.base_url, error = %e, "Analysis request failed");
                ResultView::local_failure()
            }
        }
    }

    async fn post_analyze(&self, submission: &EmailSubmission) -> Result<Value, PhishGuardError> {
        let resp = self.client
            .post(format!("{}/analyze", self.base_url))
            .json(submission)
            .send()
            .await
            .map_err(|e| PhishGuardError::Network(format!("Backend request failed: {}", e)))?;

        let status = resp.status();
        let value: Value = resp.json().await
            .map_err(|e| PhishGuardError::Network(format!("Undecodable backend response: {}", e)))?;
        debug!(%status, "Backend answered analysis request");
        Ok(value)
    }
}
