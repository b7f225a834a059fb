use anyhow::Result;
use clap::Parser;
use cndr_server::{Config, init_tracing, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    serve(config).await?;
    Ok(())
}
