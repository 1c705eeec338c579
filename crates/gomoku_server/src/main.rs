//! Gomoku - HTTP game server binary.

use anyhow::Result;
use clap::Parser;
use gomoku_core::GameEngine;
use gomoku_server::{API_REFERENCE, AppState, Cli, Command, ServerConfig, router};
use std::path::PathBuf;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host, config } => run_server(config, host, port).await,
        Command::Docs => {
            print!("{}", API_REFERENCE);
            Ok(())
        }
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    initialize_tracing();

    let config = ServerConfig::load(config_path.as_deref())?.with_overrides(host, port);
    info!(?config, "Configuration resolved");

    // One game per process, shared by every handler
    let engine = GameEngine::new();
    let app = router(AppState::new(engine, config.keep_alive()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gomoku_server=debug,gomoku_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
