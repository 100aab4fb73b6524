use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let provider = state.analyzer.provider();
    Json(json!({
        "status": "healthy",
        "service": "phishguard",
        "version": env!("CARGO_PKG_VERSION"),
        "git_hash": option_env!("PHISHGUARD_GIT_HASH"),
        "built_at": env!("PHISHGUARD_BUILD_TIMESTAMP"),
        "provider": provider.provider_name(),
        "model": provider.model_name(),
    }))
}
