use cndr_core::{ClientEvent, HandshakeError, HandshakeRequest, HandshakeResponse, ServerEvent};
use tracing::{info, warn};

use crate::signaling::ConnectionId;

/// Admission check for a handshake. Pure; consults nothing but the request.
///
/// Only a host must present a (non-empty) host key. Room codes, room
/// passwords and non-host roles are accepted as given.
pub fn validate_handshake(request: &HandshakeRequest) -> Result<(), HandshakeError> {
    if request.role.is_host() && request.host_key().is_none() {
        return Err(HandshakeError::MissingHostKey);
    }
    Ok(())
}

pub fn respond_to_handshake(request: &HandshakeRequest) -> HandshakeResponse {
    validate_handshake(request).into()
}

/// Handshake progress of a single connection.
#[derive(Debug)]
pub struct HandshakeSession {
    connection_id: ConnectionId,
    answered: bool,
}

impl HandshakeSession {
    pub fn new(connection_id: ConnectionId) -> Self {
        Self {
            connection_id,
            answered: false,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Returns the reply to send on this connection, if any. Only the first
    /// handshake on a connection is answered.
    pub fn handle(&mut self, event: ClientEvent) -> Option<ServerEvent> {
        match event {
            ClientEvent::Handshake(request) => {
                info!(
                    connection = %self.connection_id,
                    "handshake received for room {}", request.room_code
                );

                if self.answered {
                    warn!(
                        connection = %self.connection_id,
                        "ignoring repeated handshake for room {}", request.room_code
                    );
                    return None;
                }
                self.answered = true;

                let response = respond_to_handshake(&request);
                if let Some(reason) = response.error_message() {
                    warn!(
                        connection = %self.connection_id,
                        role = %request.role,
                        "handshake rejected: {}", reason
                    );
                }

                Some(ServerEvent::Handshake(response))
            }
        }
    }
}
