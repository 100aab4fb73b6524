use std::path::Path;
use crate::errors::PhishGuardError;
use super::credentials::resolve_credential;
use super::types::PhishGuardConfig;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Parse and validate a YAML configuration file.
pub async fn parse_config(path: &Path) -> Result<PhishGuardConfig, PhishGuardError> {
    if !path.exists() {
        return Err(PhishGuardError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(PhishGuardError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: PhishGuardConfig = if content.trim().is_empty() {
        PhishGuardConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "Loaded configuration file");
    Ok(config)
}

/// Build the effective configuration: defaults, then the optional file, then
/// the process environment.
pub async fn load_config(path: Option<&Path>) -> Result<PhishGuardConfig, PhishGuardError> {
    let mut config = match path {
        Some(p) => parse_config(p).await?,
        None => PhishGuardConfig::default(),
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config)?;
    Ok(config)
}

/// Overlay environment values onto `config`. `lookup` abstracts the
/// environment so callers can supply a fixed map.
pub fn apply_env_overrides<F>(config: &mut PhishGuardConfig, lookup: F) -> Result<(), PhishGuardError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.server.port = port.trim().parse().map_err(|_| {
            PhishGuardError::Config(format!("PORT must be a valid port number, got '{}'", port))
        })?;
    }
    if let Some(host) = lookup("PHISHGUARD_HOST") {
        config.server.host = host;
    }
    if let Some(key) = lookup("GROQ_API_KEY") {
        config.llm.api_key = Some(key);
    }
    if let Some(model) = lookup("PHISHGUARD_MODEL") {
        config.llm.model = model;
    }
    if let Some(base_url) = lookup("PHISHGUARD_LLM_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(url) = lookup("BACKEND_URL") {
        config.ui.backend_url = Some(url);
    }
    Ok(())
}

/// Resolve the upstream API key, failing when none is configured.
pub fn require_api_key(config: &PhishGuardConfig) -> Result<String, PhishGuardError> {
    config
        .llm
        .api_key
        .as_deref()
        .and_then(resolve_credential)
        .ok_or_else(|| {
            PhishGuardError::Config(
                "No model API key configured. Set GROQ_API_KEY or llm.api_key".into(),
            )
        })
}

fn validate_config(config: &PhishGuardConfig) -> Result<(), PhishGuardError> {
    if config.server.port == 0 {
        return Err(PhishGuardError::Config("server.port must be non-zero".into()));
    }
    if config.llm.model.trim().is_empty() {
        return Err(PhishGuardError::Config("llm.model must not be empty".into()));
    }
    if config.llm.max_tokens == 0 {
        return Err(PhishGuardError::Config("llm.max_tokens must be positive".into()));
    }
    if !(0.0..=2.0).contains(&config.llm.temperature) {
        return Err(PhishGuardError::Config(format!(
            "llm.temperature must be between 0 and 2, got {}",
            config.llm.temperature
        )));
    }
    if !is_http_url(&config.llm.base_url) {
        return Err(PhishGuardError::Config(format!(
            "llm.base_url must be an http(s) URL, got '{}'",
            config.llm.base_url
        )));
    }
    if let Some(url) = &config.ui.backend_url {
        if !url.trim().is_empty() && !is_http_url(url) {
            return Err(PhishGuardError::Config(format!(
                "ui.backend_url must be an http(s) URL, got '{}'",
                url
            )));
        }
    }
    if config.llm.temperature > 1.0 {
        warn!(temperature = config.llm.temperature, "High sampling temperature makes JSON output less reliable");
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    match reqwest::Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
