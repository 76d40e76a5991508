//! Command-line interface for playlab.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Playlab - play, replay and route turn-based games locally
#[derive(Parser, Debug)]
#[command(name = "playlab")]
#[command(about = "Local tools for the playlab game portal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "playlab.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Who answers the second seat's turns
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    /// Every move comes from the command line
    None,
    /// The second seat plays random legal moves
    Random,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game from a list of moves and print the final position
    Play {
        /// Game to play (defaults to the configured game)
        #[arg(short, long)]
        game: Option<String>,

        /// Setup seed (defaults to the configured seed)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Comma-separated player ids, in seat order
        #[arg(short, long, value_delimiter = ',')]
        players: Option<Vec<String>>,

        /// Opponent for the second seat
        #[arg(long, value_enum, default_value = "none")]
        opponent: Opponent,

        /// Write a replay log of the game to this file
        #[arg(long)]
        record: Option<PathBuf>,

        /// Moves in order: board squares (0-8 or labels) or JSON actions
        moves: Vec<String>,
    },

    /// Re-run a recorded game and print the final position
    Replay {
        /// Replay log written by `play --record`
        file: PathBuf,
    },

    /// Resolve a location hash to a named route
    Route {
        /// Hash such as `#/games/tictactoe`
        hash: String,
    },

    /// Build the hash URL for a named route
    Url {
        /// Route name, e.g. `game`
        name: String,

        /// Parameters as KEY=VALUE
        params: Vec<String>,
    },

    /// Print values from the seeded random generator
    Random {
        /// Seed (defaults to the configured seed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// How many values to print
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Resume from a saved generator state instead of a seed
        #[arg(long, conflicts_with = "seed")]
        from_state: Option<u32>,
    },
}
