//! Built-in games and their command-line presentation.

use anyhow::{Context, Result, bail};
use playlab_gamekit::EngineRegistry;
use playlab_tictactoe::{Position, TicTacToeAction, TicTacToeEngine, TicTacToeState, rules};
use serde_json::Value;

/// Registry holding every game shipped with playlab.
pub fn builtin_registry() -> EngineRegistry {
    let mut registry = EngineRegistry::new();
    registry.register(TicTacToeEngine::new());
    registry
}

/// Parses a move typed on the command line.
///
/// A move is either a JSON action or, for tic-tac-toe, a board index
/// (0-8) or square label such as `center`.
pub fn parse_move(game_id: &str, raw: &str) -> Result<Value> {
    let raw = raw.trim();
    if raw.starts_with('{') {
        return serde_json::from_str(raw).with_context(|| format!("Invalid JSON action: {}", raw));
    }

    if game_id == TicTacToeEngine::GAME_ID {
        let position = Position::from_label_or_number(raw)
            .with_context(|| format!("Unknown square: {}", raw))?;
        return Ok(serde_json::to_value(TicTacToeAction::from(position))?);
    }

    bail!("Moves for {} must be JSON actions, got: {}", game_id, raw)
}

/// Human-readable summary of a game state.
///
/// Tic-tac-toe states render as a board; other games as pretty JSON.
pub fn render_state(game_id: &str, state: &Value) -> Result<String> {
    if game_id == TicTacToeEngine::GAME_ID {
        let state: TicTacToeState =
            serde_json::from_value(state.clone()).context("Malformed tic-tac-toe state")?;
        let status = match (state.game_over(), state.winners()) {
            (false, _) => format!("{} to move", state.current_player_id()),
            (true, None) => "Draw".to_string(),
            (true, Some(winners)) => {
                let line = rules::winning_line(state.board())
                    .map(|line| line.map(|pos| pos.label()).join(", "))
                    .map(|labels| format!(" on {}", labels))
                    .unwrap_or_default();
                format!("{} won{}", winners.join(" and "), line)
            }
        };
        return Ok(format!("{}\n\n{} (turn {})", state.board().display(), status, state.turn()));
    }

    Ok(serde_json::to_string_pretty(state)?)
}
