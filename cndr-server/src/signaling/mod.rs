mod connection;
mod frame;
mod handshake;
mod ws_handler;

pub use connection::*;
pub use frame::*;
pub use handshake::*;
pub use ws_handler::*;
