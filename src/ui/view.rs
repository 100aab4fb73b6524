use serde::Deserialize;
use serde_json::Value;
use crate::errors::PhishGuardError;
use crate::models::{ClassificationResult, EmailSubmission};
use super::samples::Sample;
use super::style::{style_for, SeverityStyle};

pub const MISSING_FIELDS_NOTICE: &str = "Please enter both sender email and email content";
pub const LOCAL_FAILURE_EXPLANATION: &str = "Failed to analyze email. Please try again.";
pub const LOCAL_FAILURE_RECOMMENDATION: &str = "Try again with different content";

/// A result as the UI reads it. Built leniently from whatever JSON the
/// backend returned, since model output is passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub classification: String,
    pub confidence: String,
    pub explanation: String,
    pub threats: Vec<String>,
    pub recommendation: String,
}

impl ResultView {
    pub fn from_value(value: &Value) -> Self {
        let threats = match value.get("threats") {
            Some(Value::Array(items)) => items.iter().map(|t| display_field(Some(t))).collect(),
            _ => Vec::new(),
        };
        Self {
            classification: display_field(value.get("classification")),
            confidence: display_field(value.get("confidence")),
            explanation: display_field(value.get("explanation")),
            threats,
            recommendation: display_field(value.get("recommendation")),
        }
    }

    pub fn from_result(result: &ClassificationResult) -> Self {
        Self {
            classification: result.classification.to_string(),
            confidence: result.confidence.to_string(),
            explanation: result.explanation.clone(),
            threats: result.threats.clone(),
            recommendation: result.recommendation.clone(),
        }
    }

    /// Shown when the backend could not be reached or answered with garbage.
    pub fn local_failure() -> Self {
        Self::from_result(&ClassificationResult::error(
            LOCAL_FAILURE_EXPLANATION,
            LOCAL_FAILURE_RECOMMENDATION,
        ))
    }

    pub fn style(&self) -> &'static SeverityStyle {
        style_for(&self.classification)
    }
}

fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Analyzing,
    Done(ResultView),
}

impl ViewState {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, ViewState::Analyzing)
    }
}

/// Everything needed to render the page once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub form: EmailSubmission,
    pub view: ViewState,
    pub notice: Option<String>,
}

impl PageModel {
    pub fn idle(form: EmailSubmission) -> Self {
        Self { form, view: ViewState::Idle, notice: None }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    #[default]
    Analyze,
    SamplePhishing,
    SampleSafe,
}

/// Fields posted by the page form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub sender_email: String,
    pub subject: String,
    pub email_content: String,
    pub action: FormAction,
}

impl FormInput {
    pub fn submission(&self) -> EmailSubmission {
        EmailSubmission::new(&self.sender_email, &self.subject, &self.email_content)
    }
}

/// Outcome of a form post before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Re-render without contacting the backend.
    Render(PageModel),
    /// Inputs are complete; send them for analysis.
    Submit(EmailSubmission),
}

/// Sender and body must be non-blank before anything is sent.
pub fn validate_submission(submission: &EmailSubmission) -> Result<(), PhishGuardError> {
    if submission.has_required_fields() {
        Ok(())
    } else {
        Err(PhishGuardError::InvalidInput(MISSING_FIELDS_NOTICE.into()))
    }
}

pub fn handle_action(input: &FormInput) -> Step {
    match input.action {
        FormAction::SamplePhishing => Step::Render(PageModel::idle(Sample::Phishing.submission())),
        FormAction::SampleSafe => Step::Render(PageModel::idle(Sample::Legitimate.submission())),
        FormAction::Analyze => {
            let submission = input.submission();
            match validate_submission(&submission) {
                Ok(()) => Step::Submit(submission),
                Err(_) => Step::Render(PageModel {
                    form: submission,
                    view: ViewState::Idle,
                    notice: Some(MISSING_FIELDS_NOTICE.to_string()),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analyze_input(sender: &str, subject: &str, body: &str) -> FormInput {
        FormInput {
            sender_email: sender.into(),
            subject: subject.into(),
            email_content: body.into(),
            action: FormAction::Analyze,
        }
    }

    #[test]
    fn test_result_view_from_model_output() {
        let view = ResultView::from_value(&json!({
            "classification": "Phishing",
            "confidence": 95,
            "explanation": "Lookalike domain",
            "threats": ["Spoofed sender", "Credential harvesting link"],
            "recommendation": "Do not click"
        }));
        assert_eq!(view.classification, "Phishing");
        assert_eq!(view.confidence, "95");
        assert_eq!(view.threats.len(), 2);
        assert_eq!(view.style().css_class, "severity-phishing");
    }

    #[test]
    fn test_result_view_tolerates_malformed_fields() {
        let view = ResultView::from_value(&json!({
            "classification": 7,
            "confidence": "high",
            "threats": "many"
        }));
        assert_eq!(view.classification, "7");
        assert_eq!(view.confidence, "high");
        assert!(view.threats.is_empty());
        assert_eq!(view.explanation, "");
        assert_eq!(view.style().css_class, "severity-neutral");
    }

    #[test]
    fn test_local_failure_view() {
        let view = ResultView::local_failure();
        assert_eq!(view.classification, "Error");
        assert_eq!(view.confidence, "0");
        assert_eq!(view.explanation, LOCAL_FAILURE_EXPLANATION);
        assert_eq!(view.recommendation, LOCAL_FAILURE_RECOMMENDATION);
        assert_eq!(view.style().css_class, "severity-neutral");
    }

    #[test]
    fn test_empty_body_rejected_before_submit() {
        let step = handle_action(&analyze_input("a@b.c", "hello", "  "));
        match step {
            Step::Render(page) => {
                assert_eq!(page.notice.as_deref(), Some(MISSING_FIELDS_NOTICE));
                assert_eq!(page.view, ViewState::Idle);
                assert_eq!(page.form.sender_email, "a@b.c");
            }
            Step::Submit(_) => panic!("empty body must not be submitted"),
        }
    }

    #[test]
    fn test_empty_sender_rejected_before_submit() {
        assert!(matches!(handle_action(&analyze_input("", "", "body")), Step::Render(_)));
    }

    #[test]
    fn test_subject_is_optional() {
        let step = handle_action(&analyze_input("a@b.c", "", "body"));
        assert_eq!(step, Step::Submit(EmailSubmission::new("a@b.c", "", "body")));
    }

    #[test]
    fn test_sample_actions_populate_form() {
        let input = FormInput { action: FormAction::SamplePhishing, ..Default::default() };
        match handle_action(&input) {
            Step::Render(page) => {
                assert_eq!(page.form, Sample::Phishing.submission());
                assert!(page.notice.is_none());
            }
            Step::Submit(_) => panic!("sample loader must not submit"),
        }

        let input = FormInput { action: FormAction::SampleSafe, ..Default::default() };
        assert!(matches!(handle_action(&input), Step::Render(p) if p.form == Sample::Legitimate.submission()));
    }

    #[test]
    fn test_validate_submission_error_kind() {
        let err = validate_submission(&EmailSubmission::default()).unwrap_err();
        assert!(matches!(err, PhishGuardError::InvalidInput(_)));
    }
}
