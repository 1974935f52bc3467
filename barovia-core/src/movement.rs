//! Movement validation for adjacency-gated single steps

use crate::board::{Board, Hex};

/// Outcome of a move request
///
/// Ephemeral: produced per call, surfaced as log lines, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move is legal; the caller sets position to `to` and adopts `turn`
    Accepted { to: Hex, turn: u32 },
    /// Target lies outside board bounds
    RejectedOutOfBounds,
    /// Target is the cell the player already occupies
    RejectedSameTile,
    /// Target is on board but more than one step away
    RejectedNotAdjacent,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Validate a single-step move request
///
/// Checks run in a fixed order: bounds, then same-tile, then adjacency.
/// Pure decision function; the caller applies any state change.
pub fn attempt_move(current: Hex, target: Hex, turn: u32, board: &Board) -> MoveOutcome {
    if !board.contains(target) {
        return MoveOutcome::RejectedOutOfBounds;
    }
    if target == current {
        return MoveOutcome::RejectedSameTile;
    }
    if !current.is_neighbor(target) {
        return MoveOutcome::RejectedNotAdjacent;
    }
    MoveOutcome::Accepted {
        to: target,
        turn: turn + 1,
    }
}
