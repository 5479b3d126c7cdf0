//! Random-playout throughput measurement.

use anyhow::Result;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::info;
use twixt_core::{GameConfig, GameResult, GameState};

pub fn run(games: usize, size: usize, seed: u64) -> Result<()> {
    let config = GameConfig {
        board_size: size,
        ansi_color_output: false,
        discount: 1.0,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let start = Instant::now();
    let mut moves: u64 = 0;
    let mut red_wins = 0;
    let mut blue_wins = 0;
    let mut draws = 0;
    for game in 0..games {
        let mut state = GameState::new(&config)?;
        while state.current_player().is_some() {
            let Some(&action) = state.legal_actions().choose(&mut rng) else {
                break;
            };
            state.apply_action(action);
            moves += 1;
        }
        match state.board().result() {
            GameResult::RedWon => red_wins += 1,
            GameResult::BlueWon => blue_wins += 1,
            GameResult::Draw => draws += 1,
            GameResult::Open => {}
        }
        info!(game, moves = state.board().move_counter(), result = ?state.board().result(), "game finished");
    }
    let elapsed = start.elapsed();

    println!("{games} games of size {size} in {:.3}s", elapsed.as_secs_f64());
    println!(
        "{moves} moves total, {:.1} per game, {:.0} moves/s",
        moves as f64 / games as f64,
        moves as f64 / elapsed.as_secs_f64()
    );
    println!("X {red_wins} / O {blue_wins} / draws {draws}");
    Ok(())
}
