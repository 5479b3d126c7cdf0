//! TwixT rules engine
//!
//! This crate provides the core game logic for TwixT:
//! - Board geometry (n×n peg grid, eight knight's-move link directions)
//! - Candidate/blocker precomputation for link legality
//! - Incremental border connectivity with win/draw detection
//! - Turn-keeping game state with the pie-rule swap
//! - ASCII rendering, feature-plane encoding, JSON game records

pub mod board;
pub mod cell;
pub mod display;
pub mod error;
pub mod game;
pub mod links;
pub mod record;
pub mod state;
pub mod tensor;

// Re-exports for convenient access
pub use board::{Action, Compass, Coord, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use cell::{Border, Cell, Color, Player};
pub use error::GameError;
pub use game::{Board, GameResult};
pub use links::{BlockerIndex, Link};
pub use record::GameRecord;
pub use state::{GameConfig, GameState};
