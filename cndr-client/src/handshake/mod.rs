mod config;
mod initiator;

pub use config::*;
pub use initiator::*;
