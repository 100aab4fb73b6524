use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;
use crate::errors::FailureKind;
use crate::llm::CompletionProvider;
use crate::models::EmailSubmission;
use crate::prompts::compose_prompt;
use crate::utils::text::truncate_for_log;
use super::extract::{extract, no_response_result, Extraction};

/// Runs one email through the model provider and the extractor.
#[derive(Clone)]
pub struct Analyzer {
    provider: Arc<dyn CompletionProvider>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn CompletionProvider {
        self.provider.as_ref()
    }

    /// Classify an email. Every failure becomes an Error result.
    pub async fn analyze(&self, submission: &EmailSubmission) -> Extraction {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "analyze",
            %request_id,
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
        );

        async move {
            let prompt = compose_prompt(submission);
            let text = match self.provider.submit(&prompt).await {
                Ok(text) => text,
                Err(e) => {
                    let class = e.classify();
                    warn!(error_type = class.error_type, kind = ?class.kind, error = %e, "Model call produced no usable text");
                    return Extraction::Fallback(no_response_result(e.upstream_message()));
                }
            };

            let extraction = extract(Some(&text));
            match &extraction {
                Extraction::Model(obj) => {
                    info!(
                        classification = obj.get("classification").and_then(|v| v.as_str()).unwrap_or("?"),
                        "Email classified"
                    );
                }
                Extraction::Fallback(_) => {
                    error!(
                        kind = ?FailureKind::UnparseableOutput,
                        text = %truncate_for_log(&text),
                        "Failed to extract JSON from model output"
                    );
                }
            }
            extraction
        }
        .instrument(span)
        .await
    }
}
