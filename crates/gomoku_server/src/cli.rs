//! Command-line interface for gomoku_server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gomoku - two-player five-in-a-row over HTTP
#[derive(Parser, Debug)]
#[command(name = "gomoku_server")]
#[command(about = "Gomoku game server with live updates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to (overrides config file and GOMOKU_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config file and GOMOKU_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the HTTP API reference
    Docs,
}
