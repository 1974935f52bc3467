//! Barovia Core - hex-grid exploration engine
//!
//! This crate provides the platform-free game logic:
//! - Board geometry (rectangular hex grid with axial coordinates)
//! - Pixel-space tile geometry for renderers
//! - Adjacency-gated movement validation
//! - Player state with a JSON save record
//! - Session controller emitting log and render effects as data

pub mod board;
pub mod error;
pub mod geometry;
pub mod movement;
pub mod session;
pub mod state;

// Re-exports for convenient access
pub use board::{Board, Hex, DEFAULT_COLS, DEFAULT_ROWS, DIRECTIONS};
pub use error::{ClipboardError, RecordError, StorageError};
pub use geometry::{
    axial_to_pixel, bounding_box, hex_corners, tile_map, PixelRect, Tile, TILE_RADIUS,
};
pub use movement::{attempt_move, MoveOutcome};
pub use session::{
    BufferClipboard, Clipboard, Effects, MemoryStorage, RenderUpdate, Session, Storage, SAVE_KEY,
};
pub use state::{PlayerState, SaveRecord, DEFAULT_SEED, FULL_HP};
