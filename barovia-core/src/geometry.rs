//! Pixel-space tile geometry for renderers
//!
//! Pointy-top orientation throughout: a vertex points straight up, so the
//! first corner sits at -30 degrees and rows shift right by half a tile.

use crate::board::{Board, Hex};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Tile radius in pixels (center to corner)
pub const TILE_RADIUS: f64 = 34.0;

/// Margin added around the board extents
const VIEW_MARGIN: f64 = 16.0;

/// Center of a tile in pixel space
pub fn axial_to_pixel(hex: Hex) -> (f64, f64) {
    let x = TILE_RADIUS * 3.0_f64.sqrt() * (hex.q as f64 + hex.r as f64 / 2.0);
    let y = TILE_RADIUS * 1.5 * hex.r as f64;
    (x, y)
}

/// The six corner points of a tile centered at (cx, cy)
///
/// Corner `i` sits at `60*i - 30` degrees; coordinates are rounded to two
/// decimals so rendering output stays stable across platforms.
pub fn hex_corners(cx: f64, cy: f64) -> [(f64, f64); 6] {
    let mut corners = [(0.0, 0.0); 6];
    for (i, corner) in corners.iter_mut().enumerate() {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        *corner = (
            round2(cx + TILE_RADIUS * angle.cos()),
            round2(cy + TILE_RADIUS * angle.sin()),
        );
    }
    corners
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Precomputed geometry for one board cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tile {
    pub center: (f64, f64),
    pub corners: [(f64, f64); 6],
}

/// Geometry for every cell on the board, keyed by coordinate
pub fn tile_map(board: &Board) -> FxHashMap<Hex, Tile> {
    board
        .tiles()
        .map(|hex| {
            let center = axial_to_pixel(hex);
            let corners = hex_corners(center.0, center.1);
            (hex, Tile { center, corners })
        })
        .collect()
}

/// Axis-aligned pixel rectangle
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PixelRect {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel extents of the whole board plus a fixed margin
pub fn bounding_box(board: &Board) -> PixelRect {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for hex in board.tiles() {
        let (x, y) = axial_to_pixel(hex);
        min_x = min_x.min(x - TILE_RADIUS);
        min_y = min_y.min(y - TILE_RADIUS);
        max_x = max_x.max(x + TILE_RADIUS);
        max_y = max_y.max(y + TILE_RADIUS);
    }

    PixelRect {
        min_x: min_x - VIEW_MARGIN,
        min_y: min_y - VIEW_MARGIN,
        width: (max_x - min_x) + 2.0 * VIEW_MARGIN,
        height: (max_y - min_y) + 2.0 * VIEW_MARGIN,
    }
}
