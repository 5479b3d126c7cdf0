//! Serializable game records: save finished games as JSON and replay them.

use crate::board::Action;
use crate::game::GameResult;
use crate::state::{GameConfig, GameState};
use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A full game as a move list, enough to reconstruct every position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_size: usize,
    pub discount: f64,
    pub moves: Vec<Action>,
    pub result: GameResult,
    pub swapped: bool,
}

impl GameRecord {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size,
            discount: config.discount,
            moves: Vec::new(),
            result: GameResult::Open,
            swapped: false,
        }
    }

    pub fn record_move(&mut self, action: Action) {
        self.moves.push(action);
    }

    /// Copies the outcome of the played game into the record
    pub fn finalize(&mut self, state: &GameState) {
        self.result = state.board().result();
        self.swapped = state.board().swapped();
    }

    /// Plays the recorded moves on a fresh board and returns the final
    /// state. Fails on an illegal move or when the recorded outcome does
    /// not match the replayed one.
    pub fn replay(&self) -> Result<GameState> {
        let config = GameConfig {
            board_size: self.board_size,
            ansi_color_output: false,
            discount: self.discount,
        };
        let mut state = GameState::new(&config)?;
        for (index, &action) in self.moves.iter().enumerate() {
            let Some(player) = state.current_player() else {
                bail!("move {index} played after the game ended");
            };
            if !state.board().is_legal_action(player, action) {
                bail!("move {index} is illegal for {player:?}: {action}");
            }
            state.apply_action(action);
        }
        ensure!(
            state.board().result() == self.result,
            "recorded result {:?} does not match replayed {:?}",
            self.result,
            state.board().result()
        );
        ensure!(
            state.board().swapped() == self.swapped,
            "recorded swap flag does not match replay"
        );
        Ok(state)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing record to {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading record from {}", path.display()))?;
        let record: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing record {}", path.display()))?;
        Ok(record)
    }
}
