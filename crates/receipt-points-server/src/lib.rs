//! # Receipt Points Server
//!
//! HTTP front end for the receipt processor. Receipts live in memory for the
//! lifetime of the process.

pub mod api;
pub mod config;
pub mod logging;

pub use api::router;
pub use config::{CliArgs, LogFormat, ServerConfig};
pub use logging::init_logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use receipt_points::store::MemoryStore;
use receipt_points::ReceiptProcessor;
use tokio::net::TcpListener;

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let processor = Arc::new(ReceiptProcessor::new(
        MemoryStore::new(),
        config.processor,
    ));
    let validate = processor.config().validate_on_process;
    let app = router(processor);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    tracing::info!(
        address = %config.bind_address,
        validate,
        "receipt points server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!("cannot listen for ctrl-c, running until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}
