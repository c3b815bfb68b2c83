use anyhow::Context;

use crate::app::app;
use crate::config::AppConfig;
use crate::database::open_store;
use crate::state::AppState;

pub async fn handle(mut config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate().context("invalid configuration")?;

    let store = open_store(&config.database)
        .await
        .context("failed to open the store")?;

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server listening at http://{}", bind_addr);

    axum::serve(listener, app(AppState::new(store, config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
