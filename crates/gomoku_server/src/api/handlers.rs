//! Route handlers.

use crate::api::docs::API_REFERENCE;
use crate::api::error::ApiError;
use crate::api::request::RawMoveRequest;
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{self, Stream, StreamExt};
use gomoku_core::GameState;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// `POST /api/move`: validates and submits a move.
#[instrument(skip_all)]
pub async fn make_move(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<Json<GameState>, ApiError> {
    let request = RawMoveRequest::from_slice(&body)?.validate()?;
    debug!(row = request.row, col = request.col, stone = %request.stone, "Processing move");

    let engine = app.engine();
    match engine.try_move_with_state(request.row, request.col, request.stone) {
        Ok(state) => {
            info!(
                row = request.row,
                col = request.col,
                stone = %request.stone,
                status = %state.status(),
                "Move completed successfully"
            );
            Ok(Json(state))
        }
        Err((reason, state)) => Err(ApiError::IllegalMove {
            attempted: request,
            reason,
            state,
        }),
    }
}

/// `GET /api/state`: current snapshot, never cached.
#[instrument(skip_all)]
pub async fn get_state(State(app): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(app.engine().state()),
    )
}

/// `POST /api/reset`: starts a new game and returns its snapshot.
#[instrument(skip_all)]
pub async fn reset(State(app): State<AppState>) -> Json<GameState> {
    Json(app.engine().reset())
}

/// `GET /api/updates`: Server-Sent Events stream of snapshots.
///
/// The current state is sent first, then one event per engine notification.
/// The stream owns the subscription, so a disconnecting client unregisters
/// its subscriber when axum drops the stream.
#[instrument(skip_all)]
pub async fn updates(
    State(app): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let (tx, rx) = mpsc::unbounded_channel::<GameState>();
    let (subscription, current) = app.engine().subscribe_with_state(move |state| {
        // Fails only once the stream, and with it the receiver, is gone.
        let _ = tx.send(state.clone());
    });
    info!(
        id = %subscription.id(),
        listeners = app.engine().subscriber_count(),
        "Update stream opened"
    );

    let changes = stream::unfold((rx, subscription), |(mut rx, subscription)| async move {
        let state = rx.recv().await?;
        Some((state, (rx, subscription)))
    });
    let events = stream::once(async move { current })
        .chain(changes)
        .map(|state| Event::default().json_data(&state));

    Sse::new(events).keep_alive(KeepAlive::new().interval(*app.keep_alive()))
}

/// `GET /api/docs`: plain-text API reference.
pub async fn docs() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        API_REFERENCE,
    )
}
