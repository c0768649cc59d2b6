use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::RosterConfig;

pub mod api;
pub mod routes;
pub mod static_files;

pub use routes::{build_router, AppState};

pub async fn run_server(config: RosterConfig) -> anyhow::Result<()> {
    let fetcher = config.fetcher()?;
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config, fetcher));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "roster server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
