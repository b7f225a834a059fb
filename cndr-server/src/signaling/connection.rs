use axum::extract::ws::Message;
use cndr_core::ServerEvent;
use std::fmt;
use tokio::sync::mpsc;
use tracing::error;
use uuid::Uuid;

/// Tags one WebSocket connection in logs. Never shared between connections.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outgoing half of a connection: queues frames for the socket writer task.
#[derive(Clone)]
pub struct ConnectionSender {
    id: ConnectionId,
    tx: mpsc::UnboundedSender<Message>,
}

impl ConnectionSender {
    pub fn new(id: ConnectionId, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { id, tx }
    }

    /// Returns false once the writer task has gone away.
    pub fn send_event(&self, event: &ServerEvent) -> bool {
        match serde_json::to_string(event) {
            Ok(json) => {
                if let Err(e) = self.tx.send(Message::Text(json.into())) {
                    error!("Failed to send WS message to {}: {:?}", self.id, e);
                    return false;
                }
                true
            }
            Err(e) => {
                error!("Failed to serialize server event: {}", e);
                true
            }
        }
    }
}
