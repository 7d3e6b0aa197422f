//! HTTP server initialization and runtime setup.
//!
//! Handles logging setup, store construction, and the Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.log_level` (an `EnvFilter` directive string);
/// an unparsable directive falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.is_json_logging() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes an empty in-memory store, binds the listener and serves until
/// Ctrl-C or SIGTERM. All links are lost when the process exits.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::default();
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
