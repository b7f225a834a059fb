use crate::model::handshake::{HandshakeRequest, HandshakeResponse};
use serde::{Deserialize, Serialize};

/// Events a client may send over the WebSocket endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Handshake(HandshakeRequest),
}

/// Events the server sends back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    Handshake(HandshakeResponse),
}
