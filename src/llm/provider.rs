use async_trait::async_trait;
use crate::errors::PhishGuardError;

/// A text-completion backend: one prompt in, the model's text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit a prompt and return the completion text. An envelope without
    /// usable text is an error, never an empty string.
    async fn submit(&self, prompt: &str) -> Result<String, PhishGuardError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
