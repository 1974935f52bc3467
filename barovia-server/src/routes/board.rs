//! Board geometry endpoint
//!
//! Serves everything the renderer needs to draw the grid once: tile centers
//! and corners in pixel space, the direction table, and the view box.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use barovia_core::{bounding_box, tile_map, PixelRect, DIRECTIONS};

use crate::state::ServerState;

#[derive(Serialize)]
pub struct TileInfo {
    pub q: i32,
    pub r: i32,
    pub center: (f64, f64),
    pub corners: [(f64, f64); 6],
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub cols: i32,
    pub rows: i32,
    pub directions: Vec<[i32; 2]>,
    pub direction_names: Vec<&'static str>,
    pub tiles: Vec<TileInfo>,
    pub view: PixelRect,
}

/// Get board geometry
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Json<BoardInfo> {
    let board = *state.session.read().unwrap().board();
    let geometry = tile_map(&board);

    // row-major so the frontend draws rows top to bottom
    let tiles = board
        .tiles()
        .map(|hex| {
            let tile = geometry[&hex];
            TileInfo {
                q: hex.q,
                r: hex.r,
                center: tile.center,
                corners: tile.corners,
            }
        })
        .collect();

    Json(BoardInfo {
        cols: board.cols,
        rows: board.rows,
        directions: DIRECTIONS.iter().map(|&(dq, dr)| [dq, dr]).collect(),
        direction_names: vec!["E", "NE", "NW", "W", "SW", "SE"],
        tiles,
        view: bounding_box(&board),
    })
}
