//! Gomoku game logic.
//!
//! A 15x15 board where black and white alternate placing stones until one
//! of them lines up five in a row.
//!
//! # Architecture
//!
//! - **Types**: stones, cells, status and the [`GameState`] snapshot
//! - **Board**: the grid and validated [`Position`]s
//! - **Rules**: win detection around the last placed stone
//! - **Contracts**: move preconditions, composed by [`LegalMove`]
//! - **Invariants**: properties every reachable state satisfies
//! - **Engine**: the shared, lock-guarded [`GameEngine`] and its subscribers
//!
//! # Example
//!
//! ```
//! use gomoku_core::{GameEngine, GameStatus, Stone};
//!
//! let engine = GameEngine::new();
//! let _subscription = engine.subscribe(|state| println!("{}", state.board()));
//!
//! assert!(engine.make_move(7, 7, Stone::Black));
//! assert!(!engine.make_move(7, 7, Stone::White));
//! assert_eq!(engine.state().status(), GameStatus::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod contracts;
mod engine;
mod error;
mod subscribers;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use action::Move;
pub use board::{BOARD_SIZE, Board, Position};
pub use types::{Cell, GameState, GameStatus, Stone};

// Crate-level exports - Validation
pub use contracts::{CellIsEmpty, GameInProgress, LegalMove, PlayersTurn};
pub use error::MoveError;

// Crate-level exports - Engine
pub use engine::{GameEngine, Subscription};
pub use subscribers::{Callback, SubscriptionId};
