//! Tests for the HTTP API and the live update stream.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use futures::StreamExt;
use gomoku_core::{GameEngine, GameState, GameStatus, Stone};
use gomoku_server::{AppState, router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

fn app() -> (GameEngine, Router) {
    let engine = GameEngine::new();
    let app = router(AppState::new(engine.clone(), Duration::from_secs(60)));
    (engine, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_move(body: impl Into<Body>) -> Request<Body> {
    Request::post("/api/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn move_body(row: usize, col: usize, stone: &str) -> String {
    json!({ "row": row, "col": col, "stone": stone }).to_string()
}

#[tokio::test]
async fn test_valid_move_returns_new_state() {
    let (engine, app) = app();
    let (status, body) = send(&app, post_move(move_body(7, 7, "black"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][7][7], "black");
    assert_eq!(body["currentPlayer"], "white");
    assert_eq!(body["gameStatus"], "playing");
    assert_eq!(serde_json::from_value::<GameState>(body).unwrap(), engine.state());
}

#[tokio::test]
async fn test_out_of_range_coordinates_rejected() {
    let (engine, app) = app();
    let (status, body) = send(&app, post_move(move_body(15, 7, "black"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid row or col value");
    assert_eq!(body["details"]["validRange"], "0-14");
    assert_eq!(body["details"]["receivedTypes"]["row"], "number");
    assert_eq!(engine.state(), GameState::new());
}

#[tokio::test]
async fn test_whole_float_coordinates_place_stone() {
    let (engine, app) = app();
    let body = json!({ "row": 7.0, "col": 8.0, "stone": "black" }).to_string();
    let (status, body) = send(&app, post_move(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][7][8], "black");
    assert_eq!(engine.state().current_player(), Stone::White);
}

#[tokio::test]
async fn test_invalid_stone_rejected() {
    let (_engine, app) = app();
    let (status, body) = send(&app, post_move(move_body(7, 7, "invalid"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Stone must be either \"black\" or \"white\"");
    assert_eq!(body["details"]["receivedValue"], "invalid");
    assert_eq!(body["details"]["allowedValues"], json!(["black", "white"]));
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let (_engine, app) = app();
    let (status, body) = send(&app, post_move("not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_illegal_moves_report_reason() {
    let (engine, app) = app();

    let (status, body) = send(&app, post_move(move_body(7, 7, "white"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid move");
    assert_eq!(body["details"]["reason"], "Not your turn (current turn: black)");
    assert_eq!(body["details"]["attempted"], json!({"row": 7, "col": 7, "stone": "white"}));

    assert!(engine.make_move(7, 7, Stone::Black));
    let (_, body) = send(&app, post_move(move_body(7, 7, "white"))).await;
    assert_eq!(body["details"]["reason"], "Position is already occupied");
    assert_eq!(body["details"]["currentState"]["isOccupied"], true);
    assert_eq!(body["details"]["currentState"]["currentPlayer"], "white");
}

#[tokio::test]
async fn test_moves_after_win_report_finished() {
    let (engine, app) = app();
    for col in 0..4 {
        assert!(engine.make_move(0, col, Stone::Black));
        assert!(engine.make_move(1, col, Stone::White));
    }
    let (status, body) = send(&app, post_move(move_body(0, 4, "black"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gameStatus"], "black-wins");
    assert_eq!(body["currentPlayer"], "white");

    let (status, body) = send(&app, post_move(move_body(5, 5, "white"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["reason"], "Game is already finished");
    assert_eq!(body["details"]["currentState"]["gameStatus"], "black-wins");
}

#[tokio::test]
async fn test_state_endpoint() {
    let (engine, app) = app();
    assert!(engine.make_move(3, 4, Stone::Black));

    let response = app
        .clone()
        .oneshot(Request::get("/api/state").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let state: GameState = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(state, engine.state());
}

#[tokio::test]
async fn test_reset_returns_fresh_state() {
    let (engine, app) = app();
    assert!(engine.make_move(3, 4, Stone::Black));

    let (status, body) = send(
        &app,
        Request::post("/api/reset").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_value::<GameState>(body).unwrap(), GameState::new());
    assert_eq!(engine.state(), GameState::new());
}

#[tokio::test]
async fn test_docs_endpoint() {
    let (_engine, app) = app();
    let response = app
        .oneshot(Request::get("/api/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("POST /api/move"));
}

/// Reads frames until one full `data:` event has arrived.
async fn next_event(stream: &mut axum::body::BodyDataStream) -> GameState {
    let mut buffer = String::new();
    loop {
        let chunk = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("timed out waiting for event")
            .expect("stream ended")
            .unwrap();
        buffer.push_str(std::str::from_utf8(&chunk).unwrap());
        if let Some(end) = buffer.find("\n\n") {
            let data = buffer[..end]
                .lines()
                .find_map(|line| line.strip_prefix("data:"))
                .expect("event without data");
            return serde_json::from_str(data.trim()).unwrap();
        }
    }
}

#[tokio::test]
async fn test_updates_stream_pushes_state_changes() {
    let (engine, app) = app();
    assert!(engine.make_move(7, 7, Stone::Black));

    let response = app
        .clone()
        .oneshot(Request::get("/api/updates").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
    assert_eq!(engine.subscriber_count(), 1);

    let mut events = response.into_body().into_data_stream();
    assert_eq!(next_event(&mut events).await, engine.state());

    let (status, _) = send(&app, post_move(move_body(7, 8, "white"))).await;
    assert_eq!(status, StatusCode::OK);
    let pushed = next_event(&mut events).await;
    assert_eq!(pushed.current_player(), Stone::Black);
    assert_eq!(pushed, engine.state());

    engine.reset();
    assert_eq!(next_event(&mut events).await, GameState::new());
}

#[tokio::test]
async fn test_disconnect_unsubscribes() {
    let (engine, app) = app();
    let response = app
        .oneshot(Request::get("/api/updates").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(engine.subscriber_count(), 1);

    drop(response);
    assert_eq!(engine.subscriber_count(), 0);
    assert!(engine.make_move(7, 7, Stone::Black));
    assert_eq!(engine.state().status(), GameStatus::Playing);
}
