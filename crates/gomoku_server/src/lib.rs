//! Gomoku game server.
//!
//! Serves the single game of a process over HTTP.
//!
//! # Architecture
//!
//! - **API**: JSON endpoints for moves, state and reset, plus a Server-Sent
//!   Events stream that pushes every state change
//! - **State**: the shared [`GameEngine`](gomoku_core::GameEngine) handed to handlers
//! - **Config**: defaults, TOML file, environment and CLI flags
//!
//! # Example
//!
//! ```no_run
//! use gomoku_core::GameEngine;
//! use gomoku_server::{AppState, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(AppState::new(GameEngine::new(), config.keep_alive()));
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod cli;
mod config;
mod state;

// Crate-level exports - HTTP API
pub use api::{API_REFERENCE, ApiError, MoveRequest, RawMoveRequest, router};

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, HOST_ENV, PORT_ENV, ServerConfig};

// Crate-level exports - Shared state
pub use state::AppState;
