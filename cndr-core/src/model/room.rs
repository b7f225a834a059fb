use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a room. The server keeps no record of which codes exist.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct RoomCode(pub String);

impl RoomCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
