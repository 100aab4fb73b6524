use super::types::PhishGuardError;

/// Where a failure sits in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The model provider could not be reached or rejected the call.
    UpstreamUnavailable,
    /// The provider answered but the envelope carried no text.
    UpstreamDegenerate,
    /// Text came back but no JSON object could be recovered from it.
    UnparseableOutput,
    /// Required form fields were missing; nothing was sent.
    ClientInput,
    /// Startup, configuration and other local failures.
    Local,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub kind: FailureKind,
}

impl PhishGuardError {
    /// Classify this error for logging and for picking the user-facing message.
    pub fn classify(&self) -> ErrorClassification {
        let (error_type, kind) = match self {
            PhishGuardError::Network(_) => ("NetworkError", FailureKind::UpstreamUnavailable),
            PhishGuardError::Authentication(_) => ("AuthenticationError", FailureKind::UpstreamUnavailable),
            PhishGuardError::RateLimit(_) => ("RateLimitError", FailureKind::UpstreamUnavailable),
            PhishGuardError::LlmApi(_) => ("LLMApiError", FailureKind::UpstreamUnavailable),
            PhishGuardError::EmptyResponse => ("EmptyResponseError", FailureKind::UpstreamDegenerate),
            PhishGuardError::InvalidInput(_) => ("InvalidInputError", FailureKind::ClientInput),
            PhishGuardError::Config(_) => ("ConfigError", FailureKind::Local),
            PhishGuardError::Io(_) => ("IoError", FailureKind::Local),
            PhishGuardError::Json(_) => ("JsonError", FailureKind::Local),
            PhishGuardError::Yaml(_) => ("YamlError", FailureKind::Local),
            PhishGuardError::Internal(_) => ("InternalError", FailureKind::Local),
        };
        ErrorClassification { error_type, kind }
    }

    /// Message the provider itself reported, safe to show to the user verbatim.
    /// Only errors lifted out of the provider's error envelope qualify.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            PhishGuardError::LlmApi(msg) if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_is_upstream_unavailable() {
        let err = PhishGuardError::Network("connection refused".into());
        let class = err.classify();
        assert_eq!(class.kind, FailureKind::UpstreamUnavailable);
        assert_eq!(class.error_type, "NetworkError");
    }

    #[test]
    fn test_empty_response_is_degenerate() {
        let class = PhishGuardError::EmptyResponse.classify();
        assert_eq!(class.kind, FailureKind::UpstreamDegenerate);
    }

    #[test]
    fn test_invalid_input_is_client_side() {
        let err = PhishGuardError::InvalidInput("missing body".into());
        assert_eq!(err.classify().kind, FailureKind::ClientInput);
    }

    #[test]
    fn test_config_is_local() {
        let err = PhishGuardError::Config("no key".into());
        assert_eq!(err.classify().kind, FailureKind::Local);
    }

    #[test]
    fn test_upstream_message_only_for_api_errors() {
        let api = PhishGuardError::LlmApi("Invalid API Key".into());
        assert_eq!(api.upstream_message(), Some("Invalid API Key"));

        let net = PhishGuardError::Network("dns failure at 10.0.0.1".into());
        assert_eq!(net.upstream_message(), None);

        let blank = PhishGuardError::LlmApi(String::new());
        assert_eq!(blank.upstream_message(), None);
    }
}
