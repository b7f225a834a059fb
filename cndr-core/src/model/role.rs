use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Capability class requested by a connecting party.
///
/// Only `Host` carries an extra requirement (a host key). Role strings the
/// server does not recognise are kept as `Other` and are treated like any
/// other non-host role.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Host,
    Client,
    Audience,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Host => "host",
            Role::Client => "client",
            Role::Audience => "audience",
            Role::Other(s) => s,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, Role::Host)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "host" => Role::Host,
            "client" => Role::Client,
            "audience" => Role::Audience,
            _ => Role::Other(s),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
