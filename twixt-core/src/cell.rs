//! Per-position cell state: occupancy, links, candidates, border flags

use crate::board::{Compass, Coord, COMPASS_COUNT};
use serde::{Deserialize, Serialize};

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red = 0,
    Blue = 1,
}

pub const PLAYER_COUNT: usize = 2;

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The two home edges a player must connect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Border {
    Start = 0,
    End = 1,
}

pub const BORDER_COUNT: usize = 2;

impl Border {
    pub const BOTH: [Border; BORDER_COUNT] = [Border::Start, Border::End];
}

/// Cell occupancy; corner points are off-board and can never hold a peg
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Empty,
    #[default]
    OffBoard,
    Owned(Player),
}

/// One grid position.
///
/// `links` and `candidates` are bitmasks over the eight directions.
/// A candidate bit means the knight's-move neighbor in that direction is
/// on-board and linking to it has not yet been ruled out for that player;
/// candidate masks only ever lose bits. Border flags are monotonic the other
/// way: once a cell is proven connected to a home edge the flag stays set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    color: Color,
    links: u8,
    candidates: [u8; PLAYER_COUNT],
    neighbors: [Option<Coord>; COMPASS_COUNT],
    linked_to_border: [[bool; BORDER_COUNT]; PLAYER_COUNT],
}

impl Cell {
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn has_link(&self, dir: Compass) -> bool {
        self.links & dir.bit() != 0
    }

    pub fn has_links(&self) -> bool {
        self.links != 0
    }

    pub fn links(&self) -> u8 {
        self.links
    }

    pub(crate) fn set_link(&mut self, dir: Compass) {
        self.links |= dir.bit();
    }

    pub fn is_candidate(&self, player: Player, dir: Compass) -> bool {
        self.candidates[player.index()] & dir.bit() != 0
    }

    pub fn candidates(&self, player: Player) -> u8 {
        self.candidates[player.index()]
    }

    pub(crate) fn set_candidate(&mut self, player: Player, dir: Compass) {
        self.candidates[player.index()] |= dir.bit();
    }

    pub(crate) fn delete_candidate(&mut self, player: Player, dir: Compass) {
        self.candidates[player.index()] &= !dir.bit();
    }

    /// Drop a direction for both players at once (a drawn crossing link
    /// rules the segment out regardless of color)
    pub(crate) fn delete_candidate_for_both(&mut self, dir: Compass) {
        self.candidates[Player::Red.index()] &= !dir.bit();
        self.candidates[Player::Blue.index()] &= !dir.bit();
    }

    /// Precomputed knight's-move target; `None` when it falls off-board
    pub fn neighbor(&self, dir: Compass) -> Option<Coord> {
        self.neighbors[dir.index()]
    }

    pub(crate) fn set_neighbor(&mut self, dir: Compass, target: Coord) {
        self.neighbors[dir.index()] = Some(target);
    }

    pub fn is_linked_to_border(&self, player: Player, border: Border) -> bool {
        self.linked_to_border[player.index()][border as usize]
    }

    pub(crate) fn set_linked_to_border(&mut self, player: Player, border: Border) {
        self.linked_to_border[player.index()][border as usize] = true;
    }
}
