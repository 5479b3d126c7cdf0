//! Random self-play with board output after every move.

use anyhow::{anyhow, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing::info;
use twixt_core::{GameConfig, GameRecord, GameState};

pub fn run(
    size: usize,
    seed: Option<u64>,
    no_color: bool,
    quiet: bool,
    output: Option<&Path>,
) -> Result<()> {
    let config = GameConfig {
        board_size: size,
        ansi_color_output: !no_color,
        discount: 1.0,
    };
    let mut state = GameState::new(&config)?;
    let mut record = GameRecord::new(&config);
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    while let Some(player) = state.current_player() {
        let action = *state
            .legal_actions()
            .choose(&mut rng)
            .ok_or_else(|| anyhow!("open game without legal actions"))?;
        info!(
            mv = state.board().move_counter() + 1,
            player = ?player,
            notation = %state.board().action_to_string(action),
            "placing peg"
        );
        record.record_move(action);
        state.apply_action(action);
        if !quiet {
            println!("{}", state.board());
        }
    }
    record.finalize(&state);

    if quiet {
        println!("{}", state.board());
    }
    let [red, blue] = state.returns();
    println!(
        "\nresult: {:?} after {} moves, returns X {:+.1} / O {:+.1}",
        state.board().result(),
        state.board().move_counter(),
        red,
        blue
    );

    if let Some(path) = output {
        record.save(path)?;
        info!(path = %path.display(), "game record saved");
    }
    Ok(())
}
