//! HTTP server bootstrap.
//!
//! [`serve`] binds the address from [`AppConfig`] and runs the router until
//! the process is asked to stop.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::infrastructure::AppConfig;

/// Serves `router` on the configured address until SIGINT or SIGTERM.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(router: Router, config: &AppConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    let local = listener.local_addr()?;
    tracing::info!(%local, "Shows API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(stop_requested())
        .await?;

    tracing::info!("Shows API stopped");
    Ok(())
}

/// Resolves on the first stop request. A handler that cannot be installed
/// never resolves, so the other one still works.
async fn stop_requested() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(error) => {
                tracing::warn!(%error, "SIGINT handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(error) => {
                tracing::warn!(%error, "SIGTERM handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "Draining connections");
}
