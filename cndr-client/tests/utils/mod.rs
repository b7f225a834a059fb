
pub use scripted_peer::*;
pub use test_server::*;
