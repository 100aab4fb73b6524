pub mod client;
pub mod page;
pub mod routes;
pub mod samples;
pub mod style;
pub mod terminal;
pub mod view;

use axum::Router;
use client::BackendClient;

#[derive(Clone)]
pub struct UiState {
    pub client: BackendClient,
}

impl UiState {
    pub fn new(backend_url: &str) -> Self {
        Self { client: BackendClient::new(backend_url) }
    }
}

pub fn build_router(state: UiState) -> Router {
    Router::new()
        .route("/", axum::routing::get(routes::index).post(routes::submit))
        .with_state(state)
}
