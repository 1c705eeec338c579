//! The authoritative game engine.
//!
//! One [`GameEngine`] owns the single game of a server process. Handles are
//! cheap to clone and share the same state. A single mutex guards both the
//! game state and the subscriber list, so every operation is atomic with
//! respect to the others and subscribers always see a fully applied move.

use crate::action::Move;
use crate::board::Position;
use crate::contracts::LegalMove;
use crate::error::MoveError;
use crate::rules::check_win;
use crate::subscribers::{SubscriberRegistry, SubscriptionId};
use crate::types::{GameState, GameStatus, Stone};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Default)]
struct EngineInner {
    state: GameState,
    subscribers: SubscriberRegistry,
}

/// State is committed before subscribers run, so a lock poisoned by a
/// panicking subscriber still guards a consistent game.
fn lock(inner: &Mutex<EngineInner>) -> MutexGuard<'_, EngineInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to the game.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    inner: Arc<Mutex<EngineInner>>,
}

impl GameEngine {
    /// Creates an engine with an empty board and black to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game engine");
        Self::default()
    }

    /// Attempts a move, returning the new snapshot or the reason it was rejected.
    ///
    /// On success the stone is placed, the turn passes to the other color
    /// (even when the move wins), the win check runs around the new stone,
    /// and every subscriber has been notified before this returns. On
    /// failure nothing changes and nobody is notified.
    pub fn try_move(&self, row: usize, col: usize, stone: Stone) -> Result<GameState, MoveError> {
        self.try_move_with_state(row, col, stone).map_err(|(reason, _)| reason)
    }

    /// Like [`try_move`](Self::try_move), but a rejection also carries the
    /// state the move was checked against, taken under the same lock.
    #[instrument(skip(self))]
    pub fn try_move_with_state(
        &self,
        row: usize,
        col: usize,
        stone: Stone,
    ) -> Result<GameState, (MoveError, Box<GameState>)> {
        let mut inner = lock(&self.inner);
        let position = match Position::new(row, col) {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "Rejected out-of-range move");
                return Err((e, Box::new(inner.state.clone())));
            }
        };
        let mov = Move::new(stone, position);

        if let Err(e) = LegalMove::check(&mov, &inner.state) {
            warn!(
                error = %e,
                current_player = %inner.state.current_player(),
                status = %inner.state.status(),
                "Rejected illegal move"
            );
            return Err((e, Box::new(inner.state.clone())));
        }

        #[cfg(debug_assertions)]
        let before = inner.state.clone();

        inner.state.apply_move(&mov);
        if check_win(inner.state.board(), position, stone) {
            inner.state.set_status(GameStatus::won_by(stone));
            info!(winner = %stone, "Game won");
        }

        #[cfg(debug_assertions)]
        crate::invariants::assert_move_invariants(&before, &inner.state);

        let snapshot = inner.state.clone();
        debug!(
            mov = %mov,
            next = %snapshot.current_player(),
            status = %snapshot.status(),
            subscribers = inner.subscribers.len(),
            "Move accepted\n{}",
            snapshot.board()
        );
        inner.subscribers.notify(&snapshot);
        Ok(snapshot)
    }

    /// Attempts a move; `false` means it was illegal and nothing changed.
    pub fn make_move(&self, row: usize, col: usize, stone: Stone) -> bool {
        self.try_move(row, col, stone).is_ok()
    }

    /// Starts a fresh game regardless of the current state and notifies subscribers.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        let mut inner = lock(&self.inner);
        inner.state = GameState::new();
        let snapshot = inner.state.clone();
        info!(subscribers = inner.subscribers.len(), "Game reset");
        inner.subscribers.notify(&snapshot);
        snapshot
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        lock(&self.inner).state.clone()
    }

    /// Registers a callback for every later accepted move and reset.
    ///
    /// Callbacks run synchronously, in registration order, while the engine
    /// lock is held: they must not block, call back into the engine, or drop
    /// a [`Subscription`]. Dropping the returned handle unregisters.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&GameState) + Send + Sync + 'static,
    {
        self.subscribe_with_state(callback).0
    }

    /// Like [`subscribe`](Self::subscribe), also returning the state at
    /// registration time.
    ///
    /// Registration and snapshot happen under one lock, so the callback
    /// receives exactly the changes made after the returned state.
    #[instrument(skip_all)]
    pub fn subscribe_with_state<F>(&self, callback: F) -> (Subscription, GameState)
    where
        F: Fn(&GameState) + Send + Sync + 'static,
    {
        let mut inner = lock(&self.inner);
        let id = inner.subscribers.register(Box::new(callback));
        debug!(%id, subscribers = inner.subscribers.len(), "Subscriber registered");
        let subscription = Subscription {
            id,
            engine: Arc::downgrade(&self.inner),
        };
        (subscription, inner.state.clone())
    }

    /// Unregisters a subscriber. Returns false if it was already gone.
    #[instrument(skip(self))]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = lock(&self.inner).subscribers.remove(id);
        debug!(removed, "Subscriber unregistered");
        removed
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }
}

/// Handle to a registered subscriber.
///
/// Holds only a weak reference to the engine. Dropping it unregisters the
/// callback.
#[derive(Debug)]
#[must_use = "dropping a Subscription unregisters it immediately"]
pub struct Subscription {
    id: SubscriptionId,
    engine: Weak<Mutex<EngineInner>>,
}

impl Subscription {
    /// Registration token of this subscriber.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Unregisters now. Calling it again, or after the engine is gone, is a no-op.
    pub fn unsubscribe(&self) -> bool {
        let Some(inner) = self.engine.upgrade() else {
            return false;
        };
        let mut guard = lock(&inner);
        guard.subscribers.remove(self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.unsubscribe() {
            debug!(id = %self.id, "Subscriber dropped");
        }
    }
}
