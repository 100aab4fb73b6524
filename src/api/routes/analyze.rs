use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::api::AppState;
use crate::errors::PhishGuardError;
use crate::models::EmailSubmission;
use tracing::warn;

/// `POST /analyze`: 200 with the model's verdict, or 500 with an Error result
/// when the call or the extraction failed.
pub async fn analyze_email(
    State(state): State<AppState>,
    payload: Result<Json<EmailSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected analysis request body");
            return PhishGuardError::InvalidInput(rejection.body_text()).into_response();
        }
    };

    let extraction = state.analyzer.analyze(&submission).await;
    let status = if extraction.is_fallback() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, Json(extraction.into_value())).into_response()
}
