use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use interview_relay::{build_router, Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "interview-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Chat-completion endpoint (overrides GATEWAY_URL)
    #[arg(long, global = true)]
    gateway_url: Option<String>,

    /// Model identifier (overrides GATEWAY_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Reply length ceiling (overrides GATEWAY_MAX_TOKENS)
    #[arg(long, global = true)]
    max_tokens: Option<u32>,

    /// Environment variable holding the gateway token
    #[arg(long, global = true)]
    api_key_env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn container_config(&self) -> ContainerConfig {
        let mut config = ContainerConfig::from_env();
        if let Some(url) = &self.gateway_url {
            config.gateway_url = url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(var) = &self.api_key_env {
            config.api_key_env = var.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Arc::new(Container::new(cli.container_config()));

    match cli.command {
        Commands::Serve { port, public } => {
            let host = if public { "0.0.0.0" } else { "127.0.0.1" };
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .context("invalid listen address")?;
            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("failed to bind to {addr}"))?;

            info!(
                "Interview relay listening on {} (gateway {})",
                addr,
                container.config().gateway_url
            );
            axum::serve(listener, build_router(container))
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("relay server failure")?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutting down, waiting for in-flight requests to complete...");
}
