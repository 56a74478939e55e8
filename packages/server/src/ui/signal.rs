//! Shutdown signal handling.

use std::sync::Arc;

use tokio::signal;

use crate::domain::ConnectionRegistry;

/// Resolve on Ctrl+C or SIGTERM, after closing every notification stream.
///
/// Open streams never end on their own, so they are closed here before
/// graceful shutdown waits for in-flight responses.
pub async fn shutdown_signal(registry: Arc<dyn ConnectionRegistry>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    let closed = registry.close_all().await;
    tracing::info!(
        "Shutdown signal received, closed {} notification stream(s)",
        closed
    );
}
