//! HTTP and WebSocket server for cndr.
//!
//! The WebSocket route `/ws` runs the room handshake: a client sends one
//! `handshake` event and gets exactly one answer back on the same socket.
//! The HTTP routes (`/health`, `/users`) answer with the `ApiResponse`
//! envelope from `cndr-core`.

mod app;
mod config;
mod error;
mod http;
mod logging;
mod signaling;
mod store;

pub use app::*;
pub use config::*;
pub use error::*;
pub use logging::*;
pub use signaling::*;
pub use store::*;

use tokio::net::TcpListener;
use tracing::info;

/// Binds the configured address and serves until ctrl-c.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let addr = config.bind_address().await?;
    let listener = TcpListener::bind(addr).await?;

    let app = router(&config, AppState::new(&config))?;

    info!("Server running at http://{}", listener.local_addr()?);
    info!("Environment: {}", config.node_env);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
