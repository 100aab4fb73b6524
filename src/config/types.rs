use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 600;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PhishGuardConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Bearer credential. A leading `$` names an environment variable.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Base URL the UI posts analysis requests to. Defaults to this server.
    pub backend_url: Option<String>,
}

impl PhishGuardConfig {
    pub fn listen_addr(&self) -> String {
        match self.server.host.parse::<Ipv6Addr>() {
            Ok(ip) => format!("[{}]:{}", ip, self.server.port),
            Err(_) => format!("{}:{}", self.server.host, self.server.port),
        }
    }

    /// Backend base URL without a trailing slash.
    pub fn backend_url(&self) -> String {
        match &self.ui.backend_url {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => format!("http://{}:{}", self.reachable_host(), self.server.port),
        }
    }

    /// Host the co-hosted UI uses to reach this server. Wildcard binds map to
    /// loopback; a specific bind address is used as-is.
    fn reachable_host(&self) -> String {
        let host = self.server.host.trim();
        match host.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) if ip.is_unspecified() => Ipv4Addr::LOCALHOST.to_string(),
            Ok(IpAddr::V6(ip)) if ip.is_unspecified() => format!("[{}]", Ipv6Addr::LOCALHOST),
            Ok(IpAddr::V6(ip)) => format!("[{}]", ip),
            _ if host.is_empty() => Ipv4Addr::LOCALHOST.to_string(),
            _ => host.to_string(),
        }
    }
}
