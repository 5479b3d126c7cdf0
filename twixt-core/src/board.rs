//! Board geometry: grid coordinates and the eight knight's-move link directions

use crate::cell::Player;
use serde::{Deserialize, Serialize};

/// Smallest playable board
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest playable board
pub const MAX_BOARD_SIZE: usize = 24;

/// Tournament-style small board used when no size is given
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Move index: `y * size + x`
pub type Action = usize;

/// Grid coordinates; x points right along the columns, y points up along the rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by (dx, dy); may leave the grid
    pub fn offset(self, delta: (i8, i8)) -> Self {
        Self::new(self.x + delta.0, self.y + delta.1)
    }

    /// Inside the n×n grid (corners included)
    pub fn on_grid(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }

    pub fn action(self, size: usize) -> Action {
        self.y as usize * size + self.x as usize
    }

    pub fn from_action(action: Action, size: usize) -> Self {
        Self::new((action % size) as i8, (action / size) as i8)
    }
}

/// Outside the grid, or one of the four corner points that belong to no player
pub fn off_board(c: Coord, size: usize) -> bool {
    let last = (size - 1) as i8;
    !c.on_grid(size) || ((c.x == 0 || c.x == last) && (c.y == 0 || c.y == last))
}

/// On the given player's two home edges: rows 0 and n−1 for Red,
/// columns 0 and n−1 for Blue (corners excluded)
pub fn on_player_border(player: Player, c: Coord, size: usize) -> bool {
    let last = (size - 1) as i8;
    match player {
        Player::Red => (c.y == 0 || c.y == last) && c.x > 0 && c.x < last,
        Player::Blue => (c.x == 0 || c.x == last) && c.y > 0 && c.y < last,
    }
}

/// The eight link directions, clockwise from NNE
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    Nne = 0, // 2 up, 1 right
    Ene = 1, // 1 up, 2 right
    Ese = 2, // 1 down, 2 right
    Sse = 3, // 2 down, 1 right
    Ssw = 4, // 2 down, 1 left
    Wsw = 5, // 1 down, 2 left
    Wnw = 6, // 1 up, 2 left
    Nnw = 7, // 2 up, 1 left
}

pub const COMPASS_COUNT: usize = 8;

/// Target offsets (dx, dy) indexed by direction
const LINK_OFFSETS: [(i8, i8); COMPASS_COUNT] = [
    (1, 2),   // NNE
    (2, 1),   // ENE
    (2, -1),  // ESE
    (1, -2),  // SSE
    (-1, -2), // SSW
    (-2, -1), // WSW
    (-2, 1),  // WNW
    (-1, 2),  // NNW
];

impl Compass {
    pub const ALL: [Compass; COMPASS_COUNT] = [
        Compass::Nne,
        Compass::Ene,
        Compass::Ese,
        Compass::Sse,
        Compass::Ssw,
        Compass::Wsw,
        Compass::Wnw,
        Compass::Nnw,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction bit for link/candidate masks
    pub fn bit(self) -> u8 {
        1 << self as usize
    }

    /// Offset of the knight's-move target
    pub fn offset(self) -> (i8, i8) {
        LINK_OFFSETS[self as usize]
    }

    /// The same link seen from the target peg
    pub fn opposite(self) -> Self {
        Self::ALL[(self as usize + COMPASS_COUNT / 2) % COMPASS_COUNT]
    }
}
