//! Game API endpoints
//!
//! Every mutation returns the same full view the frontend would get from
//! `GET /api/game/state`, so a single render path handles all responses.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use barovia_core::{Hex, RenderUpdate, SaveRecord};

use crate::state::ServerState;

/// Full frontend view of the session
#[derive(Serialize)]
pub struct GameView {
    pub state: SaveRecord,
    pub render: RenderUpdate,
    pub log: Vec<String>,
}

fn view(state: &ServerState) -> GameView {
    let session = state.session.read().unwrap();
    GameView {
        state: session.state().to_record(),
        render: session.render_update(),
        log: state.log.read().unwrap().clone(),
    }
}

/// Get the current session view
pub async fn get_state(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    Json(view(&state))
}

/// Reset to a fresh game
pub async fn new_game(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    let effects = state.session.write().unwrap().new_game();
    state.absorb(&effects);
    Json(view(&state))
}

/// Move request
#[derive(Deserialize)]
pub struct MoveRequest {
    pub q: i32,
    pub r: i32,
}

/// Request a single-step move
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Json<GameView> {
    let effects = state
        .session
        .write()
        .unwrap()
        .try_move(Hex::new(req.q, req.r));
    state.absorb(&effects);
    Json(view(&state))
}

/// Persist the current state to the save slot
pub async fn save_game(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    let effects = state.session.write().unwrap().save();
    state.absorb(&effects);
    Json(view(&state))
}

/// Restore state from the save slot
pub async fn load_game(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    let effects = state.session.write().unwrap().load();
    state.absorb(&effects);
    Json(view(&state))
}

/// Export the save text for copying
pub async fn export_save(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let mut session = state.session.write().unwrap();
    let effects = session.export_text();
    let text = session.clipboard().last.clone();
    drop(session);
    state.absorb(&effects);

    Json(json!({
        "text": text,
        "log": effects.log,
    }))
}

/// Import request
#[derive(Deserialize)]
pub struct ImportRequest {
    pub raw: String,
}

/// Restore state from pasted save text
pub async fn import_save(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ImportRequest>,
) -> Json<GameView> {
    let effects = state.session.write().unwrap().import_text(&req.raw);
    state.absorb(&effects);
    Json(view(&state))
}
