mod api;
mod handshake;
mod role;
mod room;
mod signaling;
mod user;

pub use api::{ApiResponse, HealthStatus, Page, PaginatedResponse, PaginationParams};
pub use handshake::{HOST_KEY_REQUIRED, HandshakeError, HandshakeRequest, HandshakeResponse};
pub use role::Role;
pub use room::RoomCode;
pub use signaling::{ClientEvent, ServerEvent};
pub use user::{NewUser, User, UserId};
