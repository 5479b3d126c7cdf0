//! TwixT command-line interface
//!
//! Commands:
//! - play: run a single random self-play game, optionally saving the record
//! - bench: time a batch of random playouts

mod bench;
mod play;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "twixt")]
#[command(about = "TwixT connection game engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a random self-play game
    Play {
        #[arg(long, default_value = "8")]
        size: usize,
        /// Seed for the move generator, random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Disable ANSI colors in board output
        #[arg(long)]
        no_color: bool,
        /// Print only the final position
        #[arg(long)]
        quiet: bool,
        /// Save the finished game as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Time random playouts
    Bench {
        #[arg(long, default_value = "100")]
        games: usize,
        #[arg(long, default_value = "8")]
        size: usize,
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            seed,
            no_color,
            quiet,
            output,
        } => play::run(size, seed, no_color, quiet, output.as_deref()),
        Commands::Bench { games, size, seed } => bench::run(games, size, seed),
    }
}
