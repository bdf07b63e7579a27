//! WebSocket gateway: accepts connections, enforces the two-participant
//! cap, and adapts socket frames to match-session calls.

use crate::config::DEFAULT_MATCH_ID;
use crate::protocol::ServerMessage;
use crate::registry::SessionRegistry;
use crate::session::{ConnectionId, MatchSession};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn router(registry: Arc<SessionRegistry>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/ws", get(default_ws_handler))
        .route("/match/:match_id/ws", get(match_ws_handler))
        .with_state(registry)
}

async fn health() -> &'static str {
    "ok"
}

async fn default_ws_handler(
    State(registry): State<Arc<SessionRegistry>>,
    ws: WebSocketUpgrade,
) -> Response {
    upgrade(&registry, DEFAULT_MATCH_ID, ws)
}

async fn match_ws_handler(
    State(registry): State<Arc<SessionRegistry>>,
    Path(match_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    upgrade(&registry, &match_id, ws)
}

fn upgrade(registry: &SessionRegistry, match_id: &str, ws: WebSocketUpgrade) -> Response {
    let session = registry.session(match_id);
    let id = registry.next_connection_id();
    ws.on_upgrade(move |socket| handle_socket(session, id, socket))
}

async fn handle_socket(session: Arc<MatchSession>, id: ConnectionId, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (outbound, mut pending) = mpsc::unbounded_channel::<ServerMessage>();

    if let Err(err) = session.join(id, outbound) {
        log::warn!("connection {} rejected: {}", id, err);
        let notice = ServerMessage::Error {
            message: err.to_string(),
        };
        if let Ok(text) = serde_json::to_string(&notice) {
            let _ = ws_tx.send(Message::Text(text)).await;
        }
        let _ = ws_tx.close().await;
        return;
    }

    // Forward session pushes to the socket. Ends when the session drops the
    // sender on disconnect or the socket goes away.
    let forwarder = tokio::spawn(async move {
        while let Some(message) = pending.recv().await {
            let text = match serde_json::to_string(&message) {
                Ok(text) => text,
                Err(err) => {
                    log::error!("failed to encode outbound message: {}", err);
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
        let _ = ws_tx.close().await;
    });

    while let Some(Ok(frame)) = ws_rx.next().await {
        match frame {
            Message::Text(text) => session.handle_message(id, &text),
            Message::Binary(_) => session.reject_payload(id),
            Message::Close(_) => break,
            Message::Ping(_) | Message::Pong(_) => {}
        }
    }

    session.disconnect(id);
    let _ = forwarder.await;
}
