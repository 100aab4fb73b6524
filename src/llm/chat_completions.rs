use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::credentials::redact_credentials;
use crate::config::LlmConfig;
use crate::errors::PhishGuardError;
use super::provider::CompletionProvider;
use super::types::{ChatRequest, Message};
use tracing::debug;

/// Client for an OpenAI-compatible chat completions endpoint (Groq by default).
pub struct ChatCompletionsProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatCompletionsProvider {
    pub fn new(api_key: &str, config: &LlmConfig) -> Self {
        Self::with_client(Client::new(), api_key, config)
    }

    pub fn with_client(client: Client, api_key: &str, config: &LlmConfig) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    fn request_body(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionsProvider {
    async fn submit(&self, prompt: &str) -> Result<String, PhishGuardError> {
        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| PhishGuardError::Network(format!("Chat completion request failed: {}", e)))?;

        let status = resp.status().as_u16();
        let data: Value = resp.json().await
            .map_err(|e| PhishGuardError::Network(format!("Undecodable chat completion envelope: {}", e)))?;

        debug!(
            model = %self.model,
            status,
            raw = %redact_credentials(&data.to_string(), &self.api_key),
            "Chat completion raw response"
        );

        let input_tokens = data["usage"]["prompt_tokens"].as_u64();
        let output_tokens = data["usage"]["completion_tokens"].as_u64();
        debug!(model = %self.model, input_tokens, output_tokens, "Chat completion usage");

        read_envelope(status, &data)
    }

    fn provider_name(&self) -> &str { "chat_completions" }
    fn model_name(&self) -> &str { &self.model }
}

/// Pull the completion text out of a response envelope.
///
/// An `error.message` in the body wins over the status code so the provider's
/// own wording reaches the caller.
pub fn read_envelope(status: u16, data: &Value) -> Result<String, PhishGuardError> {
    if let Some(msg) = data["error"]["message"].as_str() {
        return Err(PhishGuardError::LlmApi(msg.to_string()));
    }
    match status {
        401 => return Err(PhishGuardError::Authentication("Model provider rejected the API key".into())),
        429 => return Err(PhishGuardError::RateLimit("Model provider rate limit exceeded".into())),
        s if !(200..300).contains(&s) => {
            return Err(PhishGuardError::Network(format!("Model provider returned HTTP {}", s)));
        }
        _ => {}
    }

    match data["choices"][0]["message"]["content"].as_str() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(PhishGuardError::EmptyResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_envelope_returns_content() {
        let data = json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"classification\":\"Safe\"}"}}]
        });
        assert_eq!(read_envelope(200, &data).unwrap(), "{\"classification\":\"Safe\"}");
    }

    #[test]
    fn test_read_envelope_empty_choices() {
        let err = read_envelope(200, &json!({"choices": []})).unwrap_err();
        assert!(matches!(err, PhishGuardError::EmptyResponse));
    }

    #[test]
    fn test_read_envelope_empty_content() {
        let data = json!({"choices": [{"message": {"content": ""}}]});
        assert!(matches!(read_envelope(200, &data), Err(PhishGuardError::EmptyResponse)));
    }

    #[test]
    fn test_read_envelope_error_message_wins() {
        let data = json!({"error": {"message": "Invalid API Key", "type": "invalid_request_error"}});
        let err = read_envelope(401, &data).unwrap_err();
        assert_eq!(err.upstream_message(), Some("Invalid API Key"));
    }

    #[test]
    fn test_read_envelope_status_without_body() {
        assert!(matches!(read_envelope(401, &json!({})), Err(PhishGuardError::Authentication(_))));
        assert!(matches!(read_envelope(429, &json!({})), Err(PhishGuardError::RateLimit(_))));
        assert!(matches!(read_envelope(503, &json!({})), Err(PhishGuardError::Network(_))));
    }

    #[test]
    fn test_request_body_uses_config() {
        let config = LlmConfig::default();
        let provider = ChatCompletionsProvider::new("gsk_test", &config);
        let body = serde_json::to_value(provider.request_body("hello")).unwrap();
        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["max_tokens"], 600);
        assert_eq!(body["messages"], json!([{"role": "user", "content": "hello"}]));
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = LlmConfig { base_url: "https://api.groq.com/openai/v1/".into(), ..Default::default() };
        let provider = ChatCompletionsProvider::new("k", &config);
        assert_eq!(provider.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(provider.model_name(), "llama-3.1-8b-instant");
    }
}
