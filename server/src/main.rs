mod config;
mod gateway;
mod routes;
mod services;
mod state;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ConfigError;
use crate::gateway::{GatewayClient, GatewayError, ServiceInventory};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

/// Reasons the portal can fail to start or stop serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("gateway client: {0}")]
    Gateway(#[from] GatewayError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portal failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::PortalConfig::from_env()?;
    let port = config.port;
    let gateway_config = config.gateway.clone();
    let state = state::AppState::new(config);

    // Without a gateway every tenant sees the full service layout.
    let _refresh = match gateway_config {
        Some(gateway) => {
            let client = GatewayClient::new(&gateway)?;
            tracing::info!(admin_url = client.admin_url(), "gateway inventory enabled");
            let inventory: Arc<dyn ServiceInventory> = Arc::new(client);
            Some(services::availability::spawn_refresh_task(
                state.clone(),
                inventory,
                Duration::from_secs(gateway.refresh_secs),
            ))
        }
        None => {
            tracing::warn!("GATEWAY_ADMIN_URL not set; showing all services");
            None
        }
    };

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, "portal listening");
    axum::serve(listener, routes::into_make_service(app))
        .await
        .map_err(StartupError::Serve)
}
