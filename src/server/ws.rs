use super::AppState;
use crate::session::{ClientCommand, SessionCoordinator, SessionId};
use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// The two halves of a client connection a session needs
#[async_trait]
pub trait ClientSocket: Send {
    /// Next inbound frame, `None` once the peer is gone
    async fn recv(&mut self) -> Option<Result<Message, axum::Error>>;

    async fn send(&mut self, message: Message) -> Result<(), axum::Error>;
}

#[async_trait]
impl ClientSocket for WebSocket {
    async fn recv(&mut self) -> Option<Result<Message, axum::Error>> {
        WebSocket::recv(self).await
    }

    async fn send(&mut self, message: Message) -> Result<(), axum::Error> {
        WebSocket::send(self, message).await
    }
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let outbound_buffer = state.settings.outbound_buffer;
    ws.on_upgrade(move |socket| serve_session(socket, state.coordinator, outbound_buffer))
}

/// One connection is one session, alive until either side hangs up
pub async fn serve_session<S: ClientSocket>(
    mut socket: S,
    coordinator: Arc<SessionCoordinator>,
    outbound_buffer: usize,
) {
    let id = coordinator.next_session_id();
    let (tx, mut rx) = mpsc::channel(outbound_buffer);
    coordinator.register(id, tx).await;

    loop {
        tokio::select! {
            inbound = socket.recv() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    if let Some(reply) = apply_text(&coordinator, id, &text).await {
                        if socket.send(Message::Text(reply)).await.is_err() {
                            debug!("{} reply could not be sent", id);
                            break;
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!("{} socket error: {}", id, e);
                    break;
                }
            },
            outbound = rx.recv() => match outbound {
                Some(snapshot) => match serde_json::to_string(&snapshot) {
                    Ok(json) => {
                        if socket.send(Message::Text(json)).await.is_err() {
                            debug!("{} snapshot could not be sent", id);
                            break;
                        }
                    }
                    Err(e) => warn!("Failed to encode snapshot for {}: {}", id, e),
                },
                None => break,
            },
        }
    }

    coordinator.disconnect(id).await;
}

/// Parse and apply one inbound frame. Returns the error reply, if any.
async fn apply_text(coordinator: &SessionCoordinator, id: SessionId, text: &str) -> Option<String> {
    let result = match serde_json::from_str::<ClientCommand>(text) {
        Ok(command) => {
            debug!("{} command {:?}", id, command);
            coordinator.handle_command(id, command).await.map_err(|e| e.to_string())
        }
        Err(e) => Err(format!("invalid command: {}", e)),
    };

    result.err().map(|message| {
        warn!("{} rejected command: {}", id, message);
        serde_json::json!({ "error": message }).to_string()
    })
}
