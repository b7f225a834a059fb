use std::time::Duration;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("websocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    #[error("failed to encode handshake: {0}")]
    Encode(#[source] serde_json::Error),

    /// The server answered the handshake with an error.
    #[error("{0}")]
    Rejected(String),

    #[error("connection closed before the handshake completed")]
    ConnectionClosed,

    #[error("no handshake response within {0:?}")]
    Timeout(Duration),

    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<tungstenite::Error> for ClientError {
    fn from(e: tungstenite::Error) -> Self {
        ClientError::WebSocket(Box::new(e))
    }
}
