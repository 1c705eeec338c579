//! Shared handler state.

use derive_getters::Getters;
use derive_new::new;
use gomoku_core::GameEngine;
use std::time::Duration;

/// State handed to every route: the process's one game engine.
#[derive(Debug, Clone, Getters, new)]
pub struct AppState {
    /// The game.
    engine: GameEngine,
    /// Keep-alive interval for update streams.
    keep_alive: Duration,
}
