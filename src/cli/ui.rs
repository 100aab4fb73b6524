use crate::api;
use crate::cli::commands::UiArgs;
use crate::config::PhishGuardConfig;
use crate::errors::PhishGuardError;
use crate::ui::{self, UiState};
use tracing::info;

pub async fn handle_ui(args: UiArgs, mut config: PhishGuardConfig) -> Result<(), PhishGuardError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(url) = args.backend_url {
        config.ui.backend_url = Some(url);
    }

    let backend_url = config.backend_url();
    let app = api::with_http_layers(ui::build_router(UiState::new(&backend_url)));

    let addr = config.listen_addr();
    info!(addr = %addr, backend = %backend_url, "Starting PhishGuard UI");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| PhishGuardError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
