//! `WebSocket` handler for real-time creation-event streaming.
//!
//! Clients connect to `GET /socket` and receive a JSON-encoded
//! [`WsPush`] frame each time a post is created. The handler uses a
//! [`broadcast::Receiver`](tokio::sync::broadcast::Receiver) so all
//! connected clients see the same stream; a new connection never
//! displaces an existing one.
//!
//! Inbound text and binary frames are logged and answered with a fixed
//! literal reply -- a liveness echo, not an application protocol. All
//! writes to a connection happen from that connection's own task, so the
//! push path and the echo path can never interleave frames.
//!
//! If a client falls behind, lagged messages are silently skipped and
//! the client resumes from the most recent event.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use pinboard_types::WsPush;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Fixed reply sent for every inbound text or binary frame.
const ECHO_REPLY: &str = "ack";

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming creation events.
///
/// # Route
///
/// `GET /socket`
pub async fn ws_socket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Handle the `WebSocket` lifecycle: subscribe to the broadcast channel,
/// forward each creation event as a text frame, and echo inbound frames.
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    debug!("WebSocket client connected");

    let mut rx = state.subscribe();

    loop {
        tokio::select! {
            // Receive a creation event from the handlers.
            result = rx.recv() => {
                match result {
                    Ok(push) => {
                        if !send_push(&mut socket, &push).await {
                            return;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        debug!(skipped = n, "WebSocket client lagged, skipping ahead");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        debug!("Broadcast channel closed, shutting down WebSocket");
                        return;
                    }
                }
            }
            // Check for inbound frames from the client.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        info!(text = text.as_str(), "WebSocket message received");
                        if socket.send(Message::Text(ECHO_REPLY.into())).await.is_err() {
                            debug!("WebSocket client disconnected (echo failed)");
                            return;
                        }
                    }
                    Some(Ok(Message::Binary(data))) => {
                        info!(len = data.len(), "WebSocket binary message received");
                        if socket.send(Message::Text(ECHO_REPLY.into())).await.is_err() {
                            debug!("WebSocket client disconnected (echo failed)");
                            return;
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let pong = Message::Pong(data);
                        if socket.send(pong).await.is_err() {
                            debug!("WebSocket client disconnected (pong failed)");
                            return;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("WebSocket client disconnected");
                        return;
                    }
                    Some(Err(e)) => {
                        debug!("WebSocket error: {e}");
                        return;
                    }
                    _ => {
                        // Ignore pong frames.
                    }
                }
            }
        }
    }
}

/// Serialize and send one push frame. Returns `false` when the client is
/// gone and the connection task should end.
async fn send_push(socket: &mut WebSocket, push: &WsPush) -> bool {
    let json = match serde_json::to_string(push) {
        Ok(j) => j,
        Err(e) => {
            warn!("Failed to serialize creation event: {e}");
            return true;
        }
    };

    if socket.send(Message::Text(json.into())).await.is_err() {
        debug!("WebSocket client disconnected (send failed)");
        return false;
    }

    true
}
