use clap::{Parser, ValueEnum};
use std::fmt;
use std::net::SocketAddr;

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum NodeEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl NodeEnv {
    pub fn is_development(&self) -> bool {
        matches!(self, NodeEnv::Development)
    }
}

impl fmt::Display for NodeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeEnv::Development => write!(f, "development"),
            NodeEnv::Production => write!(f, "production"),
            NodeEnv::Test => write!(f, "test"),
        }
    }
}

/// Process configuration. Every field can be given as a flag or through the
/// environment variable named next to it.
#[derive(Debug, Clone, Parser)]
#[command(name = "cndr-server")]
#[command(about = "cndr HTTP and WebSocket server")]
#[command(version)]
pub struct Config {
    #[arg(long, env = "NODE_ENV", value_enum, default_value_t = NodeEnv::Development)]
    pub node_env: NodeEnv,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "localhost")]
    pub host: String,

    /// tracing filter directive, e.g. `info` or `cndr_server=debug`
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// allowed CORS origin(s), comma separated; `*` allows any
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_env: NodeEnv::Development,
            port: 3000,
            host: "localhost".to_string(),
            log_level: "info".to_string(),
            cors_origin: "*".to_string(),
        }
    }
}

impl Config {
    /// Resolves `host:port` to the first matching socket address.
    pub async fn bind_address(&self) -> Result<SocketAddr, ServerError> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| ServerError::Config(format!("HOST '{}' did not resolve", self.host)))
    }

    /// URL of the WebSocket handshake endpoint served by this configuration.
    pub fn endpoint_address(&self) -> String {
        format!("ws://{}:{}/ws", self.host, self.port)
    }
}
