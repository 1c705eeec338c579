//! JSON API and live update stream.

mod docs;
mod error;
mod handlers;
mod request;

pub use docs::API_REFERENCE;
pub use error::ApiError;
pub use request::{MoveRequest, RawMoveRequest};

use crate::state::AppState;
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use tracing::{info, instrument};

/// Builds the application router.
#[instrument(skip_all)]
pub fn router(state: AppState) -> Router {
    info!("Building router");
    Router::new()
        .route("/api/move", post(handlers::make_move))
        .route("/api/state", get(handlers::get_state))
        .route("/api/reset", post(handlers::reset))
        .route("/api/updates", get(handlers::updates))
        .route("/api/docs", get(handlers::docs))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "Incoming HTTP request");
    let response = next.run(req).await;
    info!(status = %response.status(), %method, %uri, "Response sent");
    response
}
