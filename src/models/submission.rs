use serde::{Deserialize, Serialize};

/// Email fields submitted for analysis. Values are passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailSubmission {
    pub sender_email: String,
    pub subject: String,
    pub email_content: String,
}

impl EmailSubmission {
    pub fn new(
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        email_content: impl Into<String>,
    ) -> Self {
        Self {
            sender_email: sender_email.into(),
            subject: subject.into(),
            email_content: email_content.into(),
        }
    }

    /// Sender and body are required; subject is optional.
    pub fn has_required_fields(&self) -> bool {
        !self.sender_email.trim().is_empty() && !self.email_content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let sub: EmailSubmission = serde_json::from_str(
            r#"{"senderEmail":"a@b.c","subject":"hi","emailContent":"body"}"#,
        )
        .unwrap();
        assert_eq!(sub, EmailSubmission::new("a@b.c", "hi", "body"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let sub: EmailSubmission = serde_json::from_str(r#"{"senderEmail":"x"}"#).unwrap();
        assert_eq!(sub.subject, "");
        assert_eq!(sub.email_content, "");
    }

    #[test]
    fn test_required_fields_ignore_whitespace() {
        assert!(EmailSubmission::new("a@b.c", "", "hello").has_required_fields());
        assert!(!EmailSubmission::new("   ", "subj", "hello").has_required_fields());
        assert!(!EmailSubmission::new("a@b.c", "subj", "\n\t").has_required_fields());
    }
}
