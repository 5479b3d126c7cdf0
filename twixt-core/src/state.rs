//! Turn-taking wrapper around [`Board`] with discounted returns.

use crate::board::{Action, DEFAULT_BOARD_SIZE};
use crate::cell::Player;
use crate::error::GameError;
use crate::game::{Board, GameResult};
use serde::{Deserialize, Serialize};

pub const MIN_DISCOUNT: f64 = 0.0;
pub const MAX_DISCOUNT: f64 = 1.0;
pub const DEFAULT_DISCOUNT: f64 = 1.0;

/// Parameters a game is created from
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: usize,
    pub ansi_color_output: bool,
    pub discount: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ansi_color_output: true,
            discount: DEFAULT_DISCOUNT,
        }
    }
}

/// A game in progress: the board plus whose turn it is.
///
/// Red moves first. The wrapper alternates turns on every applied action,
/// including the swap move, and freezes once the board reports a result.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    discount: f64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        if config.discount <= MIN_DISCOUNT || config.discount > MAX_DISCOUNT {
            return Err(GameError::Discount {
                discount: config.discount,
            });
        }
        Ok(Self {
            board: Board::new(config.board_size, config.ansi_color_output)?,
            current_player: Player::Red,
            discount: config.discount,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_terminal(&self) -> bool {
        !self.board.result().is_open()
    }

    /// The player to move, or `None` once the game has ended
    pub fn current_player(&self) -> Option<Player> {
        if self.is_terminal() {
            None
        } else {
            Some(self.current_player)
        }
    }

    pub fn legal_actions(&self) -> &[Action] {
        match self.current_player() {
            Some(player) => self.board.legal_actions(player),
            None => &[],
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        self.board.apply_action(self.current_player, action);
        if self.board.result().is_open() {
            self.current_player = self.current_player.opponent();
        }
    }

    /// Per-player returns, discounted by game length: the winner scores
    /// `discount^move_counter`, the loser its negation, a draw scores zero.
    pub fn returns(&self) -> [f64; 2] {
        let reward = self.discount.powi(self.board.move_counter() as i32);
        match self.board.result() {
            GameResult::RedWon => [reward, -reward],
            GameResult::BlueWon => [-reward, reward],
            GameResult::Open | GameResult::Draw => [0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_config_validation() {
        let bad = GameConfig {
            discount: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameState::new(&bad),
            Err(GameError::Discount { .. })
        ));
        let bad = GameConfig {
            discount: 1.5,
            ..GameConfig::default()
        };
        assert!(GameState::new(&bad).is_err());
        assert!(GameState::new(&GameConfig::default()).is_ok());
    }

    #[test]
    fn test_players_alternate() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        assert_eq!(state.current_player(), Some(Player::Red));
        state.apply_action(Coord::new(3, 3).action(8));
        assert_eq!(state.current_player(), Some(Player::Blue));
        state.apply_action(Coord::new(4, 4).action(8));
        assert_eq!(state.current_player(), Some(Player::Red));
    }

    #[test]
    fn test_returns_are_discounted() {
        let config = GameConfig {
            board_size: 5,
            discount: 0.9,
            ..GameConfig::default()
        };
        let mut state = GameState::new(&config).unwrap();
        for &(x, y) in &[(1, 0), (0, 1), (2, 2), (4, 1), (1, 4)] {
            state.apply_action(Coord::new(x, y).action(5));
        }
        assert!(state.is_terminal());
        assert_eq!(state.current_player(), None);
        let expected = 0.9f64.powi(5);
        let [red, blue] = state.returns();
        assert!((red - expected).abs() < 1e-12);
        assert!((blue + expected).abs() < 1e-12);
    }

    #[test]
    fn test_random_playouts_terminate() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for size in 5..=8 {
            let config = GameConfig {
                board_size: size,
                ansi_color_output: false,
                ..GameConfig::default()
            };
            let mut state = GameState::new(&config).unwrap();
            let mut previous_len = [usize::MAX; 2];
            while let Some(player) = state.current_player() {
                let actions = state.legal_actions();
                assert!(!actions.is_empty(), "open game without moves");
                // the pie rule can restore a move, every later move shrinks
                // the mover's own list
                if state.board().move_counter() > 1 {
                    assert!(actions.len() < previous_len[player.index()]);
                }
                previous_len[player.index()] = actions.len();
                let action = *actions.choose(&mut rng).unwrap();
                assert!(state.board().is_legal_action(player, action));
                state.apply_action(action);
            }
            assert!(state.is_terminal());
            let [red, blue] = state.returns();
            assert!((red + blue).abs() < 1e-12);
        }
    }

    fn snapshot(state: &GameState) -> Vec<(u8, u8, u8, [bool; 4])> {
        let size = state.board().size() as i8;
        let mut cells = Vec::new();
        for y in 0..size {
            for x in 0..size {
                let cell = state.board().cell(Coord::new(x, y));
                cells.push((
                    cell.candidates(Player::Red),
                    cell.candidates(Player::Blue),
                    cell.links(),
                    [
                        cell.is_linked_to_border(Player::Red, crate::cell::Border::Start),
                        cell.is_linked_to_border(Player::Red, crate::cell::Border::End),
                        cell.is_linked_to_border(Player::Blue, crate::cell::Border::Start),
                        cell.is_linked_to_border(Player::Blue, crate::cell::Border::End),
                    ],
                ));
            }
        }
        cells
    }

    #[test]
    fn test_candidates_and_border_flags_are_monotonic() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for seed_game in 0..3 {
            let config = GameConfig {
                board_size: 6 + seed_game % 2,
                ansi_color_output: false,
                ..GameConfig::default()
            };
            let mut state = GameState::new(&config).unwrap();
            let mut before = snapshot(&state);
            let mut was_swapped = false;
            while !state.is_terminal() {
                let action = *state.legal_actions().choose(&mut rng).unwrap();
                state.apply_action(action);
                let after = snapshot(&state);
                // the swap rolls the whole position back, everything else
                // only ever loses candidates and gains links and flags
                if state.board().swapped() == was_swapped {
                    for (old, new) in before.iter().zip(&after) {
                        assert_eq!(new.0 & !old.0, 0);
                        assert_eq!(new.1 & !old.1, 0);
                        assert_eq!(old.2 & !new.2, 0);
                        for (&had, &has) in old.3.iter().zip(&new.3) {
                            assert!(has || !had);
                        }
                    }
                }
                was_swapped = state.board().swapped();
                before = after;
            }
        }
    }
}
