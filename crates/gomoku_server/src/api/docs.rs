//! Plain-text API reference served at `/api/docs` and printed by `gomoku_server docs`.

/// Human-readable description of every endpoint.
pub const API_REFERENCE: &str = r#"Gomoku API
==========

Two players, black and white, take turns placing stones on a 15x15 board.
Black moves first. The first to line up five stones horizontally,
vertically or diagonally wins. There is a single shared game per server.

Game state
----------
{
  "board": [[null, "black", "white", ...], ...],   15 rows of 15 cells
  "currentPlayer": "black" | "white",
  "gameStatus": "playing" | "black-wins" | "white-wins"
}

board[row][col] is null for an empty intersection. After a winning move
currentPlayer names the player who would have moved next.

1. Place a stone
   POST /api/move
   Body: {"row": 0-14, "col": 0-14, "stone": "black" | "white"}
   200: the new game state
   400: {"error": ..., "details": ...}
        "Invalid request body"
        "Invalid row or col value"
        "Stone must be either \"black\" or \"white\""
        "Invalid move", with details.reason one of
            "Game is already finished"
            "Position is already occupied"
            "Not your turn (current turn: <color>)"

   curl -X POST http://localhost:3000/api/move \
        -H 'Content-Type: application/json' \
        -d '{"row": 7, "col": 7, "stone": "black"}'

2. Read the game state
   GET /api/state
   200: the current game state

3. Start over
   POST /api/reset
   200: the fresh game state

4. Live updates (Server-Sent Events)
   GET /api/updates
   Sends the current state on connect, then one event per move or reset:
       data: {"board": [...], "currentPlayer": ..., "gameStatus": ...}

   const events = new EventSource('http://localhost:3000/api/updates');
   events.onmessage = (e) => render(JSON.parse(e.data));
"#;
