//! Notification stream handler (Server-Sent Events).
//!
//! `GET /api/notifications/{user_id}` keeps the response open and writes one
//! `data: <json>\n\n` frame per notification. The stream ends when the client
//! disconnects, when the same user opens a newer stream, or at shutdown.

use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    domain::{ConnectionFactory, OutboundFrame, Timestamp, UserId},
    ui::{error::ApiError, extract::ApiPath, state::AppState},
    usecase::{ConnectSubscriberUseCase, DisconnectSubscriberUseCase},
};

pub async fn notification_stream_handler(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let user_id = UserId::new(user_id)?;

    let (connection, rx) = ConnectionFactory::open(user_id);
    let connection_id = connection.id();
    let watcher = connection.clone();

    let connect_usecase = ConnectSubscriberUseCase::new(state.registry.clone());
    connect_usecase.execute(connection).await?;

    // Unregister once the response body (which owns `rx`) is dropped
    let registry = state.registry.clone();
    tokio::spawn(async move {
        watcher.closed().await;
        let disconnect_usecase = DisconnectSubscriberUseCase::new(registry);
        disconnect_usecase.execute(user_id, connection_id).await;

        let open_ms = Timestamp::now().value() - watcher.connected_at().value();
        let remaining = disconnect_usecase.count_remaining_connections().await;
        tracing::info!(
            "Stream {} of user {} closed after {} ms, {} stream(s) remaining",
            connection_id,
            user_id,
            open_ms,
            remaining
        );
    });

    Ok(Sse::new(event_stream(rx)).keep_alive(KeepAlive::new().interval(state.keep_alive)))
}

/// Turn queued frames into SSE events; ends on `Close` or when every sender is gone.
fn event_stream(
    rx: UnboundedReceiver<OutboundFrame>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(rx, |mut rx| async move {
        match rx.recv().await {
            Some(OutboundFrame::Data(payload)) => Some((Ok(Event::default().data(payload)), rx)),
            Some(OutboundFrame::Close) | None => None,
        }
    })
}
