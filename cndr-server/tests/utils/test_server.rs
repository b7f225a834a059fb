use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use cndr_server::{AppState, Config, NodeEnv, router};

/// A real server bound to an ephemeral localhost port. Aborted on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let config = test_config();
        let state = AppState::new(&config);
        Self::start_with(config, state).await
    }

    pub async fn start_with(config: Config, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;
        let app = router(&config, state).context("Failed to build router")?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("[TestServer] serve failed: {}", e);
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn test_config() -> Config {
    Config {
        node_env: NodeEnv::Test,
        host: "127.0.0.1".into(),
        port: 0,
        ..Config::default()
    }
}
