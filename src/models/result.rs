use serde::{Deserialize, Serialize};

/// Verdict label for an analyzed email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Safe,
    Suspicious,
    Phishing,
    /// Reserved for locally produced results; never requested from the model.
    Error,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Suspicious => "Suspicious",
            Self::Phishing => "Phishing",
            Self::Error => "Error",
        }
    }

    /// Exact, case-sensitive match against the wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Safe" => Some(Self::Safe),
            "Suspicious" => Some(Self::Suspicious),
            "Phishing" => Some(Self::Phishing),
            "Error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured outcome of one analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classification: Classification,
    /// 0-100.
    pub confidence: u8,
    pub explanation: String,
    #[serde(default)]
    pub threats: Vec<String>,
    pub recommendation: String,
}

impl ClassificationResult {
    /// Error result with zero confidence and no threats.
    pub fn error(explanation: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            classification: Classification::Error,
            confidence: 0,
            explanation: explanation.into(),
            threats: Vec::new(),
            recommendation: recommendation.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.classification == Classification::Error
    }
}
