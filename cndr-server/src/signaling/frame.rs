use cndr_core::{ClientEvent, HandshakeRequest, Role, RoomCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const HANDSHAKE_EVENT: &str = "handshake";

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed frame: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown event '{0}'")]
    UnknownEvent(String),
}

#[derive(Deserialize)]
struct RawFrame {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Decodes a text frame into a [`ClientEvent`].
///
/// Only the envelope has to be well formed. The payload of a `handshake`
/// event is read field by field and never rejected, so every handshake frame
/// produces a request the endpoint can answer.
pub fn decode_client_event(text: &str) -> Result<ClientEvent, FrameError> {
    let frame: RawFrame = serde_json::from_str(text)?;

    match frame.event.as_str() {
        HANDSHAKE_EVENT => Ok(ClientEvent::Handshake(handshake_request(&frame.data))),
        _ => Err(FrameError::UnknownEvent(frame.event)),
    }
}

fn handshake_request(data: &Value) -> HandshakeRequest {
    let room_code = match data.get("roomCode") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    // a role that is not a string can never be "host"
    let role = match data.get("role") {
        Some(Value::String(s)) => Role::from(s.as_str()),
        None | Some(Value::Null) => Role::Other(String::new()),
        Some(other) => Role::Other(other.to_string()),
    };

    HandshakeRequest {
        room_code: RoomCode::new(room_code),
        role,
        room_password: string_field(data, "roomPassword"),
        host_key: string_field(data, "hostKey").filter(|k| !k.is_empty()),
    }
}

fn string_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_owned)
}
