//! HTTP error responses.

use crate::api::request::{MoveRequest, type_name};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gomoku_core::{GameState, MoveError, Position};
use serde_json::{Value, json};
use tracing::debug;

/// A rejected API request.
///
/// Every variant is a client error and renders as `400 Bad Request` with a
/// `{"error": ..., "details": ...}` body.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ApiError {
    /// The body was not valid JSON.
    #[display("Invalid request body")]
    InvalidBody,

    /// Row or column missing, not an integer, or outside 0-14.
    #[display("Invalid row or col value")]
    InvalidCoordinates {
        /// Row as sent.
        row: Value,
        /// Column as sent.
        col: Value,
    },

    /// Stone was not `"black"` or `"white"`.
    #[display("Stone must be either \"black\" or \"white\"")]
    InvalidStone {
        /// Stone as sent.
        received: Value,
    },

    /// The engine refused the move.
    #[display("Invalid move")]
    IllegalMove {
        /// The validated request.
        attempted: MoveRequest,
        /// Why the engine refused it.
        reason: MoveError,
        /// Game state when the move was refused.
        state: Box<GameState>,
    },
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn details(&self) -> Option<Value> {
        match self {
            ApiError::InvalidBody => None,
            ApiError::InvalidCoordinates { row, col } => Some(json!({
                "row": row,
                "col": col,
                "validRange": "0-14",
                "receivedTypes": {
                    "row": type_name(row),
                    "col": type_name(col),
                },
            })),
            ApiError::InvalidStone { received } => Some(json!({
                "receivedValue": received,
                "allowedValues": ["black", "white"],
            })),
            ApiError::IllegalMove {
                attempted,
                reason,
                state,
            } => {
                let is_occupied = Position::new(attempted.row, attempted.col)
                    .map(|pos| !state.board().is_empty(pos))
                    .unwrap_or(false);
                Some(json!({
                    "attempted": attempted,
                    "currentState": {
                        "currentPlayer": state.current_player(),
                        "gameStatus": state.status(),
                        "isOccupied": is_occupied,
                    },
                    "reason": reason.to_string(),
                }))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(error = %self, "Rejecting request");
        let mut body = json!({ "error": self.to_string() });
        if let Some(details) = self.details() {
            body["details"] = details;
        }
        (self.status(), Json(body)).into_response()
    }
}
