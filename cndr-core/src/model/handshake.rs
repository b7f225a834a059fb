use crate::model::role::Role;
use crate::model::room::RoomCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HOST_KEY_REQUIRED: &str = "Host key is required for host role";

/// Sent once by the initiator right after the connection opens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandshakeRequest {
    pub room_code: RoomCode,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_key: Option<String>,
}

impl HandshakeRequest {
    pub fn new(room_code: impl Into<RoomCode>, role: Role) -> Self {
        Self {
            room_code: room_code.into(),
            role,
            room_password: None,
            host_key: None,
        }
    }

    pub fn with_room_password(mut self, password: impl Into<String>) -> Self {
        self.room_password = Some(password.into());
        self
    }

    pub fn with_host_key(mut self, key: impl Into<String>) -> Self {
        self.host_key = Some(key.into());
        self
    }

    /// The host key, if one was supplied and is not empty.
    pub fn host_key(&self) -> Option<&str> {
        self.host_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// The server's answer to a [`HandshakeRequest`].
///
/// On the wire this is `{"status":"success"}` or
/// `{"status":"error","errorMessage":"..."}`. An error always carries its
/// message; a success never reads one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HandshakeResponse {
    Success,
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

impl HandshakeResponse {
    pub fn rejected(err: &HandshakeError) -> Self {
        HandshakeResponse::Error {
            error_message: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HandshakeResponse::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            HandshakeResponse::Success => None,
            HandshakeResponse::Error { error_message } => Some(error_message),
        }
    }
}

impl From<Result<(), HandshakeError>> for HandshakeResponse {
    fn from(result: Result<(), HandshakeError>) -> Self {
        match result {
            Ok(()) => HandshakeResponse::Success,
            Err(e) => HandshakeResponse::rejected(&e),
        }
    }
}

/// Reasons a handshake can be refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeError {
    #[error("Host key is required for host role")]
    MissingHostKey,
}
