//! Client side of cndr.
//!
//! [`CndrClient`] talks to the HTTP API and always hands back an
//! [`ApiResponse`](cndr_core::ApiResponse), folding transport and HTTP
//! failures into its `error` field. [`HandshakeInitiator`] opens the
//! WebSocket endpoint and runs the one-shot room handshake.

mod error;
mod handshake;
mod http_client;

pub use error::*;
pub use handshake::*;
pub use http_client::*;

pub use cndr_core::{
    ApiResponse, HandshakeRequest, HandshakeResponse, HealthStatus, NewUser, Page,
    PaginatedResponse, Role, RoomCode, User, UserId,
};
