//! Test fixtures: an in-process server and helpers for the HTTP API.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use iine_server::ui::{serve, state::AppState};
use tokio::{net::TcpListener, sync::oneshot};

/// How long to wait for a frame before giving up
pub const FRAME_TIMEOUT: Duration = Duration::from_secs(5);

/// Server bound to an ephemeral port, stopped on drop
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        // Long keep-alive so heartbeats don't interleave with test frames
        let state = Arc::new(AppState::in_memory(Duration::from_secs(600)));

        let (tx, rx) = oneshot::channel::<()>();
        let registry = state.registry.clone();
        tokio::spawn(async move {
            let shutdown = async move {
                let _ = rx.await;
                registry.close_all().await;
            };
            serve(listener, state, shutdown)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn create_user(client: &reqwest::Client, server: &TestServer, username: &str) -> i64 {
    let response = client
        .post(format!("{}/api/users", server.base_url()))
        .json(&serde_json::json!({ "username": username }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["id"].as_i64().expect("id should be a number")
}

pub async fn create_post(client: &reqwest::Client, server: &TestServer, user_id: i64) -> i64 {
    let response = client
        .post(format!("{}/api/posts", server.base_url()))
        .json(&serde_json::json!({ "user_id": user_id, "content": "hello" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["id"].as_i64().expect("id should be a number")
}

pub async fn like(
    client: &reqwest::Client,
    server: &TestServer,
    post_id: i64,
    user_id: i64,
) -> reqwest::Response {
    client
        .post(format!("{}/api/posts/{}/likes", server.base_url(), post_id))
        .json(&serde_json::json!({ "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send request")
}

/// Reads raw text/event-stream frames from a streaming response
pub struct EventStreamReader {
    response: reqwest::Response,
    buffer: String,
}

impl EventStreamReader {
    pub async fn open(client: &reqwest::Client, server: &TestServer, user_id: i64) -> Self {
        let response = client
            .get(format!(
                "{}/api/notifications/{}",
                server.base_url(),
                user_id
            ))
            .send()
            .await
            .expect("Failed to open notification stream");
        assert_eq!(response.status(), 200);
        Self {
            response,
            buffer: String::new(),
        }
    }

    pub fn response(&self) -> &reqwest::Response {
        &self.response
    }

    /// Next complete frame (including its trailing blank line), skipping
    /// keep-alive comments. `None` once the stream has ended.
    pub async fn next_frame(&mut self) -> Option<String> {
        loop {
            if let Some(end) = self.buffer.find("\n\n") {
                let frame: String = self.buffer.drain(..end + 2).collect();
                if frame.starts_with(':') {
                    continue;
                }
                return Some(frame);
            }

            let chunk = tokio::time::timeout(FRAME_TIMEOUT, self.response.chunk())
                .await
                .expect("Timed out waiting for a frame")
                .expect("Failed to read from stream")?;
            self.buffer.push_str(&String::from_utf8_lossy(&chunk));
        }
    }

    /// Whether a data frame arrives within `wait`
    pub async fn has_frame_within(&mut self, wait: Duration) -> bool {
        matches!(
            tokio::time::timeout(wait, self.next_frame()).await,
            Ok(Some(_))
        )
    }
}

/// Parse the JSON payload of a `data: ...` frame
pub fn frame_payload(frame: &str) -> serde_json::Value {
    let data = frame
        .strip_prefix("data: ")
        .and_then(|rest| rest.strip_suffix("\n\n"))
        .expect("frame should be `data: <json>\\n\\n`");
    serde_json::from_str(data).expect("frame payload should be JSON")
}
