use crate::models::EmailSubmission;

const CLASSIFY_TEMPLATE: &str = include_str!("classify_email.txt");

/// Variables available for interpolation into the classification prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptVariables<'a> {
    pub sender_email: &'a str,
    pub subject: &'a str,
    pub email_content: &'a str,
}

impl<'a> From<&'a EmailSubmission> for PromptVariables<'a> {
    fn from(sub: &'a EmailSubmission) -> Self {
        Self {
            sender_email: &sub.sender_email,
            subject: &sub.subject,
            email_content: &sub.email_content,
        }
    }
}

impl PromptVariables<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "SENDER_EMAIL" => Some(self.sender_email),
            "SUBJECT" => Some(self.subject),
            "EMAIL_CONTENT" => Some(self.email_content),
            _ => None,
        }
    }
}

/// Build the classification prompt for one email.
pub fn compose_prompt(submission: &EmailSubmission) -> String {
    interpolate(CLASSIFY_TEMPLATE, &PromptVariables::from(submission))
}

/// Replace `{{NAME}}` placeholders in a single pass. Substituted values are
/// never rescanned, so placeholder-like text inside an email stays literal.
/// Unknown placeholders are kept as written.
pub fn interpolate(template: &str, vars: &PromptVariables<'_>) -> String {
    let mut out = String::with_capacity(
        template.len() + vars.sender_email.len() + vars.subject.len() + vars.email_content.len(),
    );
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let name = &after_open[..close];
                match vars.lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_fields() {
        let sub = EmailSubmission::new(
            "security@paypa1-secure.com",
            "URGENT: Verify Your Account Now!",
            "Click http://paypa1-secure.com/verify",
        );
        let prompt = compose_prompt(&sub);
        assert!(prompt.contains("Sender: security@paypa1-secure.com\n"));
        assert!(prompt.contains("Subject: URGENT: Verify Your Account Now!\n"));
        assert!(prompt.contains("Body: Click http://paypa1-secure.com/verify\n"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_prompt_carries_formatting_rules_and_schema() {
        let prompt = compose_prompt(&EmailSubmission::default());
        assert!(prompt.contains("Reply ONLY with JSON."));
        assert!(prompt.contains("NO backticks."));
        assert!(prompt.contains("Ensure all quotes are escaped."));
        assert!(prompt.contains(r#""classification": "Safe" | "Suspicious" | "Phishing""#));
        assert!(prompt.contains(r#""threats": ["list"]"#));
        assert!(!prompt.contains("\"Error\""));
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        let prompt = compose_prompt(&EmailSubmission::default());
        assert!(prompt.contains("Sender: \nSubject: \nBody: \n"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let sub = EmailSubmission::new("a@b.c", "s", "b");
        assert_eq!(compose_prompt(&sub), compose_prompt(&sub));
    }

    #[test]
    fn test_placeholders_in_input_are_not_expanded() {
        let sub = EmailSubmission::new("{{SUBJECT}}", "real subject", "{{SENDER_EMAIL}}");
        let prompt = compose_prompt(&sub);
        assert!(prompt.contains("Sender: {{SUBJECT}}\n"));
        assert!(prompt.contains("Body: {{SENDER_EMAIL}}\n"));
    }

    #[test]
    fn test_unknown_and_unclosed_placeholders_kept() {
        let vars = PromptVariables { sender_email: "x", ..Default::default() };
        assert_eq!(interpolate("{{OTHER}} {{SENDER_EMAIL}} {{tail", &vars), "{{OTHER}} x {{tail");
    }
}
