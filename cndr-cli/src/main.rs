use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cndr_client::{
    ApiResponse, ClientConfig, ClientError, CndrClient, HandshakeConfig, HandshakeInitiator,
    NewUser, Role,
};
use colored::*;
use dialoguer::Password;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cndr")]
#[command(about = "Talk to a cndr server")]
#[command(version)]
struct Cli {
    /// server origin
    #[arg(long, env = "CNDR_URL", default_value = "http://localhost:3000")]
    url: String,

    /// bearer token for the HTTP API
    #[arg(long, env = "CNDR_API_KEY")]
    api_key: Option<String>,

    /// HTTP request timeout in milliseconds
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server is up
    Health,

    #[command(subcommand)]
    Users(UsersCommand),

    /// Run the room handshake over the WebSocket endpoint
    Join {
        room: String,

        /// host, client or audience
        #[arg(long, default_value = "client")]
        role: Role,

        #[arg(long)]
        password: Option<String>,

        #[arg(long, conflicts_with = "prompt_host_key")]
        host_key: Option<String>,

        /// ask for the host key on the terminal instead of passing it as a flag
        #[arg(long)]
        prompt_host_key: bool,

        /// give up if the server has not answered within this many milliseconds
        #[arg(long)]
        response_timeout_ms: Option<u64>,
    },
}

#[derive(Subcommand)]
enum UsersCommand {
    Get {
        id: String,
    },
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let mut config =
        ClientConfig::new(&cli.url).with_timeout(Duration::from_millis(cli.timeout_ms));
    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key);
    }
    let client = CndrClient::new(config).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Health => print_response(client.health().await),
        Commands::Users(UsersCommand::Get { id }) => print_response(client.get_user(&id).await),
        Commands::Users(UsersCommand::List { page, limit }) => {
            print_response(client.list_users(page, limit).await)
        }
        Commands::Users(UsersCommand::Create { name, email }) => {
            print_response(client.create_user(&NewUser::new(name, email)).await)
        }
        Commands::Join {
            room,
            role,
            password,
            host_key,
            prompt_host_key,
            response_timeout_ms,
        } => {
            let host_key = if prompt_host_key {
                Some(
                    Password::new()
                        .with_prompt("Host key")
                        .allow_empty_password(true)
                        .interact()
                        .context("Failed to read host key")?,
                )
            } else {
                host_key
            };

            let mut handshake = HandshakeConfig::new(client.handshake_endpoint(), room, role);
            if let Some(password) = password {
                handshake = handshake.with_room_password(password);
            }
            if let Some(key) = host_key {
                handshake = handshake.with_host_key(key);
            }
            if let Some(ms) = response_timeout_ms {
                handshake = handshake.with_response_timeout(Duration::from_millis(ms));
            }

            join(handshake).await
        }
    }
}

async fn join(config: HandshakeConfig) -> Result<()> {
    println!(
        "{} {} as {}",
        "🔌 Joining room".cyan(),
        config.room_code.to_string().bold(),
        config.role
    );

    match HandshakeInitiator::new(config).await {
        Ok(mut initiator) => {
            println!("{}", "✨ Connected".green().bold());
            let _ = initiator.close().await;
            Ok(())
        }
        Err(ClientError::Rejected(reason)) => {
            anyhow::bail!("{} {}", "Handshake rejected:".red().bold(), reason)
        }
        Err(e) => Err(e).context("Handshake did not complete"),
    }
}

fn print_response<T: Serialize>(response: ApiResponse<T>) -> Result<()> {
    if !response.success {
        let error = response.error.unwrap_or_else(|| "Unknown error".to_string());
        anyhow::bail!("{} {}", "Request failed:".red().bold(), error);
    }

    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}
