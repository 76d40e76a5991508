//! Implementations behind the `playlab` subcommands.
//!
//! Each function returns its result instead of printing, so the binary
//! decides presentation and tests can check behavior directly.

use crate::player::RandomPlayer;
use crate::session::GameSession;
use anyhow::{Context, Result, bail};
use playlab_gamekit::{EngineRegistry, GameConfig, SeededRandom};
use playlab_router::{RouteMatch, RouteParams, RouteTable, parse_hash};
use tracing::{debug, info, instrument, warn};

/// Plays `moves` in order, letting `opponent` answer for the second seat.
///
/// Moves left over once the game ends are ignored with a warning.
#[instrument(skip(registry, config, opponent, moves), fields(moves = moves.len()))]
pub fn play<'r>(
    registry: &'r EngineRegistry,
    game_id: &str,
    config: GameConfig,
    mut opponent: Option<RandomPlayer>,
    moves: &[String],
) -> Result<GameSession<'r>> {
    let second_seat = config.player_ids().get(1).cloned();
    let mut session = GameSession::start(registry, game_id, config)?;

    let mut remaining = moves.iter().enumerate();
    loop {
        if session.is_over()? {
            let left = remaining.by_ref().count();
            if left > 0 {
                warn!(left, "Game over, ignoring remaining moves");
            }
            break;
        }

        let current = session.current_player()?;
        if second_seat.as_deref() == Some(current.as_str())
            && let Some(opponent) = opponent.as_mut()
        {
            let Some(action) = opponent.choose(session.engine(), session.state(), &current)? else {
                bail!("{} has no legal move", current);
            };
            session.play(action, &current)?;
            continue;
        }

        let Some((index, raw)) = remaining.next() else {
            break;
        };
        let action = crate::games::parse_move(game_id, raw)?;
        session
            .play(action, &current)
            .with_context(|| format!("Move {} ({}) rejected", index + 1, raw))?;
    }

    info!(moves = session.log().actions().len(), "Play finished");
    Ok(session)
}

/// Resolves `hash` against the standard routes.
#[instrument]
pub fn route(hash: &str) -> Result<Option<RouteMatch>> {
    let path = parse_hash(hash);
    Ok(RouteTable::standard()?.match_route(&path))
}

/// Builds the hash URL for route `name` from `KEY=VALUE` pairs.
///
/// Unknown names yield the root URL, as [`RouteTable::build_url`] does.
#[instrument]
pub fn url(name: &str, pairs: &[String]) -> Result<String> {
    let table = RouteTable::standard()?;
    let mut params = RouteParams::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got: {}", pair))?;
        params.insert(key.to_string(), value.to_string());
    }

    Ok(table.build_url(name, &params))
}

/// Draws `count` floats, returning them with the generator's final state.
#[instrument(skip(rng))]
pub fn random_values(mut rng: SeededRandom, count: usize) -> (Vec<f64>, u32) {
    debug!(state = rng.state(), "Drawing random values");
    let values = (0..count).map(|_| rng.random()).collect();
    (values, rng.state())
}
