use std::sync::Arc;
use crate::analysis::Analyzer;
use crate::api::{self, AppState};
use crate::cli::commands::ServeArgs;
use crate::config::{require_api_key, PhishGuardConfig};
use crate::errors::PhishGuardError;
use crate::llm::ChatCompletionsProvider;
use crate::ui::{self, UiState};
use tracing::info;

pub async fn handle_serve(args: ServeArgs, mut config: PhishGuardConfig) -> Result<(), PhishGuardError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let api_key = require_api_key(&config)?;
    let provider = ChatCompletionsProvider::new(&api_key, &config.llm);
    let analyzer = Analyzer::new(Arc::new(provider));

    let mut app = api::build_router(AppState::new(analyzer));
    if !args.api_only {
        let backend_url = config.backend_url();
        info!(backend = %backend_url, "Web UI enabled");
        app = app.merge(ui::build_router(UiState::new(&backend_url)));
    }
    let app = api::with_http_layers(app);

    let addr = config.listen_addr();
    info!(
        addr = %addr,
        model = %config.llm.model,
        llm_base_url = %config.llm.base_url,
        "Starting PhishGuard server"
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Backend running on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| PhishGuardError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
