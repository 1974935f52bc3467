//! Hex board geometry with axial coordinates

use serde::{Deserialize, Serialize};

/// Default board width in axial q
pub const DEFAULT_COLS: i32 = 11;

/// Default board height in axial r
pub const DEFAULT_ROWS: i32 = 9;

/// Axial hex coordinates (pointy-top)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The six axial neighbors, in `DIRECTIONS` order
    pub fn neighbors(&self) -> [Hex; 6] {
        let mut out = [*self; 6];
        for (i, &(dq, dr)) in DIRECTIONS.iter().enumerate() {
            out[i] = Hex::new(self.q + dq, self.r + dr);
        }
        out
    }

    /// Check if `other` is exactly one axial step away
    pub fn is_neighbor(&self, other: Hex) -> bool {
        self.neighbors().contains(&other)
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),   // E
    (1, -1),  // NE
    (0, -1),  // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // SE
];

/// Rectangular board bounds in axial space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,
}

impl Board {
    /// Both dimensions must be positive
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// Check if this hex is on the board
    pub fn contains(&self, hex: Hex) -> bool {
        hex.q >= 0 && hex.q < self.cols && hex.r >= 0 && hex.r < self.rows
    }

    /// Starting cell (floor of both midpoints)
    pub fn center(&self) -> Hex {
        Hex::new(self.cols / 2, self.rows / 2)
    }

    /// All on-board cells, row-major
    pub fn tiles(&self) -> impl Iterator<Item = Hex> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |q| Hex::new(q, r)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
