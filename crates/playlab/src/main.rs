//! Playlab - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, Opponent};
use playlab::commands;
use playlab::{
    PlaylabConfig, RandomPlayer, ReplayLog, SEED_ENV_VAR, builtin_registry, init_tracing,
    render_state,
};
use playlab_gamekit::{GameConfig, SeededRandom};
use playlab_router::ROOT_URL;
use std::path::PathBuf;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlaylabConfig::load_or_default(&cli.config)?
        .with_seed_override(std::env::var(SEED_ENV_VAR).ok().as_deref());
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play {
            game,
            seed,
            players,
            opponent,
            record,
            moves,
        } => run_play(&config, game, seed, players, opponent, record, moves),
        Command::Replay { file } => run_replay(file),
        Command::Route { hash } => run_route(&hash),
        Command::Url { name, params } => run_url(&name, &params),
        Command::Random {
            seed,
            count,
            from_state,
        } => run_random(&config, seed, count, from_state),
    }
}

/// Play a game from the command line
#[instrument(skip(config, moves))]
fn run_play(
    config: &PlaylabConfig,
    game: Option<String>,
    seed: Option<u32>,
    players: Option<Vec<String>>,
    opponent: Opponent,
    record: Option<PathBuf>,
    moves: Vec<String>,
) -> Result<()> {
    let game = game.unwrap_or_else(|| config.default_game().clone());
    let seed = seed.unwrap_or(*config.default_seed());
    let players = players.unwrap_or_else(|| config.player_ids().clone());
    let opponent = match opponent {
        Opponent::None => None,
        Opponent::Random => Some(RandomPlayer::new(u64::from(seed))),
    };

    let registry = builtin_registry();
    let session = commands::play(&registry, &game, GameConfig::new(seed, players), opponent, &moves)?;
    println!("{}", render_state(&game, session.state())?);

    if let Some(path) = record {
        session.log().write(&path)?;
        info!(path = %path.display(), "Game recorded");
    }
    Ok(())
}

/// Replay a recorded game
#[instrument]
fn run_replay(file: PathBuf) -> Result<()> {
    let log = ReplayLog::read(&file)?;
    let registry = builtin_registry();
    let session = log.replay(&registry)?;
    println!("{}", render_state(log.game(), session.state())?);
    Ok(())
}

/// Resolve a hash to a route
#[instrument]
fn run_route(hash: &str) -> Result<()> {
    match commands::route(hash)? {
        Some(matched) => println!("{}", serde_json::to_string_pretty(&matched)?),
        None => println!("No route matches {}; the router redirects to {}", hash, ROOT_URL),
    }
    Ok(())
}

/// Build a route URL
#[instrument]
fn run_url(name: &str, params: &[String]) -> Result<()> {
    println!("{}", commands::url(name, params)?);
    Ok(())
}

/// Print seeded random values
#[instrument(skip(config))]
fn run_random(
    config: &PlaylabConfig,
    seed: Option<u64>,
    count: usize,
    from_state: Option<u32>,
) -> Result<()> {
    let rng = match from_state {
        Some(state) => SeededRandom::from_state(state),
        None => SeededRandom::new(seed.unwrap_or(u64::from(*config.default_seed()))),
    };
    let (values, state) = commands::random_values(rng, count);
    for value in values {
        println!("{}", value);
    }
    println!("state: {}", state);
    Ok(())
}
