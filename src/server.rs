//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, the Axum server lifecycle and graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::MongoShortlinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client, with a ping and the unique index on `short`
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// The MongoDB client is disconnected whether serving ends cleanly or not.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached or initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = MongoShortlinkRepository::connect(
        &config.mongo_url,
        &config.database,
        &config.collection,
        config.store_timeout(),
    )
    .await
    .context("Failed to connect to MongoDB")?;

    let result = serve(&config, Arc::new(store.clone())).await;

    store.disconnect().await;
    tracing::info!("Shutdown complete");

    result
}

async fn serve(config: &Config, store: Arc<MongoShortlinkRepository>) -> Result<()> {
    let state = AppState::new(store);
    let app = app_router(state, &config.swagger_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Resolves on the first of Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
