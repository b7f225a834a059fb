use cndr_core::{ClientEvent, HandshakeResponse, ServerEvent};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::handshake::HandshakeConfig;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Handshake progress as seen from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// The server has not admitted us yet.
    Disconnected,
    /// The server answered `success`. Terminal.
    Connected,
    /// The server answered `error` with this message. Terminal.
    Failed(String),
}

/// Client half of the room handshake.
///
/// One request is sent per connection and one response is awaited for it.
/// There is no retry: a rejection is final for the lifetime of the
/// initiator.
pub struct HandshakeInitiator {
    config: HandshakeConfig,
    socket: WsStream,
    state: ConnectionState,
    request_sent: bool,
}

impl HandshakeInitiator {
    /// Opens the connection and performs the handshake right away.
    pub async fn new(config: HandshakeConfig) -> Result<Self, ClientError> {
        let mut initiator = Self::open(config).await?;
        initiator.connect().await?;
        Ok(initiator)
    }

    /// Opens the connection without sending anything. Call
    /// [`connect`](Self::connect) to run the handshake.
    pub async fn open(config: HandshakeConfig) -> Result<Self, ClientError> {
        let (socket, _) = connect_async(config.endpoint_address.as_str()).await?;
        info!("WS open: {}", config.endpoint_address);

        Ok(Self::with_socket(config, socket))
    }

    pub fn with_socket(config: HandshakeConfig, socket: WsStream) -> Self {
        Self {
            config,
            socket,
            state: ConnectionState::Disconnected,
            request_sent: false,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn config(&self) -> &HandshakeConfig {
        &self.config
    }

    /// Runs the handshake. Does nothing once connected, and repeats the
    /// first rejection once failed. The request goes out at most once per
    /// connection; calling again after a timeout only resumes waiting.
    pub async fn connect(&mut self) -> Result<(), ClientError> {
        match &self.state {
            ConnectionState::Connected => return Ok(()),
            ConnectionState::Failed(reason) => return Err(ClientError::Rejected(reason.clone())),
            ConnectionState::Disconnected => {}
        }

        if !self.request_sent {
            self.send_request().await?;
        }

        let response = match self.config.response_timeout {
            Some(limit) => tokio::time::timeout(limit, self.wait_for_response())
                .await
                .map_err(|_| ClientError::Timeout(limit))??,
            None => self.wait_for_response().await?,
        };

        self.apply(response)
    }

    /// Sends a close frame. The handshake state is left as it is.
    pub async fn close(&mut self) -> Result<(), ClientError> {
        self.socket.close(None).await?;
        Ok(())
    }

    async fn send_request(&mut self) -> Result<(), ClientError> {
        let event = ClientEvent::Handshake(self.config.request());
        let json = serde_json::to_string(&event).map_err(ClientError::Encode)?;

        self.socket.send(Message::Text(json.into())).await?;
        self.request_sent = true;

        debug!(
            "Handshake sent for room {} as {}",
            self.config.room_code, self.config.role
        );
        Ok(())
    }

    async fn wait_for_response(&mut self) -> Result<HandshakeResponse, ClientError> {
        while let Some(msg) = self.socket.next().await {
            match msg? {
                Message::Text(text) => match serde_json::from_str::<ServerEvent>(&text) {
                    Ok(ServerEvent::Handshake(response)) => return Ok(response),
                    Err(e) => warn!("Ignoring undecodable server frame: {}", e),
                },
                Message::Close(_) => return Err(ClientError::ConnectionClosed),
                _ => {}
            }
        }
        Err(ClientError::ConnectionClosed)
    }

    fn apply(&mut self, response: HandshakeResponse) -> Result<(), ClientError> {
        match response {
            HandshakeResponse::Success => {
                info!("Joined room {} as {}", self.config.room_code, self.config.role);
                self.state = ConnectionState::Connected;
                Ok(())
            }
            HandshakeResponse::Error { error_message } => {
                warn!(
                    "Handshake for room {} rejected: {}",
                    self.config.room_code, error_message
                );
                self.state = ConnectionState::Failed(error_message.clone());
                Err(ClientError::Rejected(error_message))
            }
        }
    }
}
