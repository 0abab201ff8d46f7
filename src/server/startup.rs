use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "botpanel=info,tower_http=info,serenity=warn";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `DEFAULT_LOG_FILTER`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Binds the HTTP listener and serves the application until a shutdown signal arrives.
///
/// Once the server has drained, every remaining bot session is closed.
///
/// # Arguments
/// - `config` - Application configuration with the listen address and static directory
/// - `state` - Application state shared by all handlers
///
/// # Returns
/// - `Ok(())` - Server shut down gracefully
/// - `Err(AppError::IoErr)` - Failed to bind or serve
pub async fn serve(config: &Config, state: AppState) -> Result<(), AppError> {
    let listener = TcpListener::bind(config.listen_address()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let sessions = state.sessions.clone();

    axum::serve(listener, router::app(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let closed = sessions.destroy_all().await;
    tracing::info!("Server stopped, closed {} bot sessions", closed);

    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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

    tracing::info!("Shutdown signal received");
}
