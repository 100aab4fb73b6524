use axum::{
    extract::State,
    response::Html,
    Form,
};
use crate::models::EmailSubmission;
use super::page::render_page;
use super::view::{handle_action, FormInput, PageModel, Step, ViewState};
use super::UiState;
use tracing::info;

/// `GET /`: empty form, idle results panel.
pub async fn index() -> Html<String> {
    Html(render_page(&PageModel::idle(EmailSubmission::default())))
}

/// `POST /`: load a sample or run an analysis, then render the page.
pub async fn submit(State(state): State<UiState>, Form(input): Form<FormInput>) -> Html<String> {
    let page = match handle_action(&input) {
        Step::Render(page) => page,
        Step::Submit(submission) => {
            info!(backend = %state.client.base_url(), "Submitting email for analysis");
            let result = state.client.analyze(&submission).await;
            PageModel {
                form: submission,
                view: ViewState::Done(result),
                notice: None,
            }
        }
    };
    Html(render_page(&page))
}
