use cndr_core::{HandshakeRequest, Role, RoomCode};
use std::time::Duration;

/// Everything the initiator needs to open a connection and introduce itself.
#[derive(Debug, Clone)]
pub struct HandshakeConfig {
    /// `ws://` or `wss://` URL of the server's handshake endpoint.
    pub endpoint_address: String,
    pub room_code: RoomCode,
    pub role: Role,
    pub room_password: Option<String>,
    pub host_key: Option<String>,
    /// How long to wait for the server's answer. `None` waits indefinitely.
    pub response_timeout: Option<Duration>,
}

impl HandshakeConfig {
    pub fn new(
        endpoint_address: impl Into<String>,
        room_code: impl Into<RoomCode>,
        role: Role,
    ) -> Self {
        Self {
            endpoint_address: endpoint_address.into(),
            room_code: room_code.into(),
            role,
            room_password: None,
            host_key: None,
            response_timeout: None,
        }
    }

    #[must_use]
    pub fn with_room_password(mut self, password: impl Into<String>) -> Self {
        self.room_password = Some(password.into());
        self
    }

    #[must_use]
    pub fn with_host_key(mut self, key: impl Into<String>) -> Self {
        self.host_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = Some(timeout);
        self
    }

    pub fn request(&self) -> HandshakeRequest {
        HandshakeRequest {
            room_code: self.room_code.clone(),
            role: self.role.clone(),
            room_password: self.room_password.clone(),
            host_key: self.host_key.clone(),
        }
    }
}
