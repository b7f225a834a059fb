//! Shared types for the cndr workspace.
//!
//! `model` holds the room handshake contract spoken over the WebSocket
//! endpoint and the JSON envelope returned by the HTTP API. Both the server
//! and the client crates depend on it; it has no runtime of its own.

pub mod model;

pub use model::{
    ApiResponse, ClientEvent, HOST_KEY_REQUIRED, HandshakeError, HandshakeRequest,
    HandshakeResponse, HealthStatus, NewUser, Page, PaginatedResponse, PaginationParams, Role,
    RoomCode, ServerEvent, User, UserId,
};
