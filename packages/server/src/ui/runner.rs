//! Router construction and server entry point.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Config, error::ServerError};

use super::{handler, signal::shutdown_signal, state::AppState};

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/users", post(handler::create_user))
        .route("/api/users/{user_id}", get(handler::get_user))
        .route("/api/posts", post(handler::create_post))
        .route(
            "/api/posts/{post_id}",
            get(handler::get_post).delete(handler::delete_post),
        )
        .route(
            "/api/posts/{post_id}/likes",
            post(handler::like_post).delete(handler::unlike_post),
        )
        .route(
            "/api/notifications/{user_id}",
            get(handler::notification_stream_handler),
        )
        .route("/api/debug/connections", get(handler::debug_connections))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Run the server with the given configuration.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let state = Arc::new(AppState::in_memory(config.keep_alive()));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Notification stream: http://{}/api/notifications/{{user_id}}", addr);

    let shutdown = shutdown_signal(state.registry.clone());
    serve(listener, state, shutdown).await?;

    tracing::info!("Server stopped");
    Ok(())
}
