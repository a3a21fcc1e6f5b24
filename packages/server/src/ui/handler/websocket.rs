//! WebSocket connection handlers (Connection Gateway).
//!
//! Accepts sockets, assigns each a fresh connection id and turns frames into
//! `InboundEvent`s for the Presence Coordinator. The coordinator owns every
//! state change; this module only enqueues events and forwards outbound text.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, InboundEvent},
    infrastructure::dto::websocket::ClientEventDto,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionIdFactory::generate();
    tracing::debug!("Upgrading connection '{}'", connection_id);

    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the channel closes (the connection was unregistered) or
/// the socket can no longer be written to.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Parse a text frame into an inbound event for `connection_id`.
///
/// Malformed frames and `enterRoom` payloads with blank values yield `None`.
fn decode_client_event(connection_id: &ConnectionId, text: &str) -> Option<InboundEvent> {
    let dto = match serde_json::from_str::<ClientEventDto>(text) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!(
                "Dropping malformed frame from '{}': {}",
                connection_id,
                e
            );
            return None;
        }
    };

    match dto.into_inbound_event(connection_id.clone()) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::debug!("Ignoring event from '{}': {}", connection_id, e);
            None
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive outbound events
    let (tx, rx) = mpsc::unbounded_channel();

    if state
        .events
        .send(InboundEvent::Connect {
            id: connection_id.clone(),
            channel: tx,
        })
        .is_err()
    {
        tracing::error!(
            "Presence coordinator is not running, closing '{}'",
            connection_id
        );
        return;
    }

    // Spawn a task to push outbound events to this connection
    let mut send_task = pusher_loop(rx, sender);

    // Spawn a task to receive events from this connection
    let events = state.events.clone();
    let connection_id_for_recv = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket error on '{}': {}", connection_id_for_recv, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let Some(event) = decode_client_event(&connection_id_for_recv, &text) else {
                        continue;
                    };
                    if events.send(event).is_err() {
                        break;
                    }
                }
                Message::Binary(data) => {
                    tracing::debug!(
                        "Ignoring {} bytes of binary data from '{}'",
                        data.len(),
                        connection_id_for_recv
                    );
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", connection_id_for_recv);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Every connection gets exactly one disconnect, however it ended
    if state
        .events
        .send(InboundEvent::Disconnect {
            id: connection_id.clone(),
        })
        .is_err()
    {
        tracing::warn!(
            "Presence coordinator stopped before '{}' disconnected",
            connection_id
        );
    }
}
