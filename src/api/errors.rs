use axum::{http::StatusCode, response::IntoResponse, Json};
use crate::errors::{FailureKind, PhishGuardError};
use crate::models::ClassificationResult;

/// Failures at the HTTP boundary still answer with a result-shaped body.
impl IntoResponse for PhishGuardError {
    fn into_response(self) -> axum::response::Response {
        let (status, explanation, recommendation) = match self.classify().kind {
            FailureKind::ClientInput => (
                StatusCode::BAD_REQUEST,
                "Invalid analysis request",
                "Send senderEmail, subject and emailContent as JSON",
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Backend crashed",
                "Try later",
            ),
        };

        (status, Json(ClassificationResult::error(explanation, recommendation))).into_response()
    }
}
