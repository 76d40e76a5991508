//! Tests for the tic-tac-toe engine contract.

use playlab_gamekit::{GameConfig, GameEngine};
use playlab_tictactoe::{Position, Symbol, TicTacToeAction, TicTacToeEngine, TicTacToeState};

fn new_game(seed: u32, a: &str, b: &str) -> TicTacToeState {
    TicTacToeEngine::new()
        .init(&GameConfig::new(seed, vec![a.to_string(), b.to_string()]))
        .unwrap()
}

fn play(mut state: TicTacToeState, moves: &[(i32, &str)]) -> TicTacToeState {
    let engine = TicTacToeEngine::new();
    for (position, player) in moves {
        state = engine
            .apply_action(&state, &TicTacToeAction::place(*position), player)
            .unwrap();
    }
    state
}

fn top_row_win() -> TicTacToeState {
    play(
        new_game(42, "p1", "p2"),
        &[(0, "p1"), (3, "p2"), (1, "p1"), (4, "p2"), (2, "p1")],
    )
}

// ─────────────────────────────────────────────────────────────
//  init
// ─────────────────────────────────────────────────────────────

#[test]
fn test_init_builds_empty_state() {
    let state = new_game(42, "player1", "player2");
    assert!(state.board().cells().iter().all(Option::is_none));
    assert_eq!(state.current_player_id(), "player1");
    assert!(!state.game_over());
    assert_eq!(state.winners(), None);
    assert_eq!(state.turn(), 1);
    assert_eq!(state.player_ids(), &["player1".to_string(), "player2".to_string()]);
}

#[test]
fn test_init_assigns_symbols_by_seat() {
    let state = new_game(42, "alice", "bob");
    assert_eq!(state.symbol_of("alice"), Some(Symbol::X));
    assert_eq!(state.symbol_of("bob"), Some(Symbol::O));
    assert_eq!(state.symbols().len(), 2);
}

#[test]
fn test_init_records_seed() {
    assert_eq!(new_game(12345, "p1", "p2").rng_state(), 12345);
}

#[test]
fn test_init_rejects_wrong_player_count() {
    let engine = TicTacToeEngine::new();
    let err = engine
        .init(&GameConfig::new(1, vec!["solo".to_string()]))
        .unwrap_err();
    assert!(err.message.contains("exactly 2 players"));

    let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert!(engine.init(&GameConfig::new(1, three)).is_err());
}

#[test]
fn test_init_rejects_duplicate_ids() {
    let engine = TicTacToeEngine::new();
    let twins = vec!["same".to_string(), "same".to_string()];
    assert!(engine.init(&GameConfig::new(1, twins)).is_err());
}

// ─────────────────────────────────────────────────────────────
//  apply_action
// ─────────────────────────────────────────────────────────────

#[test]
fn test_apply_places_symbol() {
    let state = play(new_game(42, "p1", "p2"), &[(4, "p1")]);
    assert_eq!(state.board().get(Position::Center), Some(Symbol::X));
}

#[test]
fn test_apply_advances_player_and_turn() {
    let state = play(new_game(42, "p1", "p2"), &[(0, "p1")]);
    assert_eq!(state.current_player_id(), "p2");
    assert_eq!(state.turn(), 2);

    let state = play(state, &[(1, "p2")]);
    assert_eq!(state.current_player_id(), "p1");
    assert_eq!(state.turn(), 3);
}

#[test]
fn test_apply_leaves_input_untouched() {
    let engine = TicTacToeEngine::new();
    let state = new_game(42, "p1", "p2");
    let snapshot = state.clone();

    let next = engine
        .apply_action(&state, &TicTacToeAction::place(4), "p1")
        .unwrap();

    assert_eq!(state, snapshot);
    assert_ne!(next, state);
}

#[test]
fn test_apply_occupied_square_fails() {
    let engine = TicTacToeEngine::new();
    let state = play(new_game(42, "p1", "p2"), &[(0, "p1")]);
    let err = engine
        .apply_action(&state, &TicTacToeAction::place(0), "p2")
        .unwrap_err();
    assert!(err.to_string().contains("Invalid action"));
    assert!(err.message.contains("occupied"));
}

#[test]
fn test_apply_out_of_turn_fails() {
    let engine = TicTacToeEngine::new();
    let state = new_game(42, "p1", "p2");
    assert!(!engine.is_valid_action(&state, &TicTacToeAction::place(0), "p2"));
    assert!(
        engine
            .apply_action(&state, &TicTacToeAction::place(0), "p2")
            .is_err()
    );
}

#[test]
fn test_filled_cells_track_turn() {
    let state = play(
        new_game(42, "p1", "p2"),
        &[(4, "p1"), (0, "p2"), (8, "p1")],
    );
    assert_eq!(state.board().filled() as u32, state.turn() - 1);
}

// ─────────────────────────────────────────────────────────────
//  is_valid_action
// ─────────────────────────────────────────────────────────────

#[test]
fn test_valid_on_empty_square() {
    let engine = TicTacToeEngine::new();
    let state = new_game(42, "p1", "p2");
    assert!(engine.is_valid_action(&state, &TicTacToeAction::place(4), "p1"));
}

#[test]
fn test_invalid_after_game_over() {
    let engine = TicTacToeEngine::new();
    let state = top_row_win();
    assert!(!engine.is_valid_action(&state, &TicTacToeAction::place(5), "p2"));
    assert!(!engine.is_valid_action(&state, &TicTacToeAction::place(5), "p1"));
}

#[test]
fn test_invalid_out_of_bounds() {
    let engine = TicTacToeEngine::new();
    let state = new_game(42, "p1", "p2");
    assert!(!engine.is_valid_action(&state, &TicTacToeAction::place(-1), "p1"));
    assert!(!engine.is_valid_action(&state, &TicTacToeAction::place(9), "p1"));
}

#[test]
fn test_invalid_for_stranger() {
    let engine = TicTacToeEngine::new();
    let state = new_game(42, "p1", "p2");
    assert!(!engine.is_valid_action(&state, &TicTacToeAction::place(0), "mallory"));
}

// ─────────────────────────────────────────────────────────────
//  valid_actions
// ─────────────────────────────────────────────────────────────

#[test]
fn test_nine_actions_at_start_in_order() {
    let engine = TicTacToeEngine::new();
    let actions = engine.valid_actions(&new_game(42, "p1", "p2"), "p1");
    let expected: Vec<_> = (0..9).map(TicTacToeAction::place).collect();
    assert_eq!(actions, expected);
}

#[test]
fn test_fewer_actions_as_board_fills() {
    let engine = TicTacToeEngine::new();
    let state = play(new_game(42, "p1", "p2"), &[(0, "p1"), (4, "p2")]);
    let actions = engine.valid_actions(&state, "p1");
    assert_eq!(actions.len(), 7);
    assert!(!actions.contains(&TicTacToeAction::place(0)));
    assert!(!actions.contains(&TicTacToeAction::place(4)));
}

#[test]
fn test_no_actions_out_of_turn() {
    let engine = TicTacToeEngine::new();
    assert!(engine.valid_actions(&new_game(42, "p1", "p2"), "p2").is_empty());
}

#[test]
fn test_no_actions_after_game_over() {
    let engine = TicTacToeEngine::new();
    let state = top_row_win();
    assert!(engine.valid_actions(&state, "p1").is_empty());
    assert!(engine.valid_actions(&state, "p2").is_empty());
}

// ─────────────────────────────────────────────────────────────
//  Win and draw detection
// ─────────────────────────────────────────────────────────────

#[test]
fn test_top_row_win() {
    let engine = TicTacToeEngine::new();
    let state = top_row_win();
    assert!(state.game_over());
    assert_eq!(state.winners(), Some(&["p1".to_string()][..]));
    assert_eq!(
        engine.winning_line(&state),
        Some(vec![0, 1, 2])
    );
}

#[test]
fn test_left_column_win() {
    let engine = TicTacToeEngine::new();
    let state = play(
        new_game(42, "p1", "p2"),
        &[(0, "p1"), (1, "p2"), (3, "p1"), (2, "p2"), (6, "p1")],
    );
    assert_eq!(engine.winners(&state), Some(&["p1".to_string()][..]));
    assert_eq!(
        engine.winning_line(&state),
        Some(vec![0, 3, 6])
    );
}

#[test]
fn test_diagonal_wins() {
    let state = play(
        new_game(42, "p1", "p2"),
        &[(0, "p1"), (1, "p2"), (4, "p1"), (2, "p2"), (8, "p1")],
    );
    assert_eq!(state.winners(), Some(&["p1".to_string()][..]));

    let state = play(
        new_game(42, "p1", "p2"),
        &[(2, "p1"), (0, "p2"), (4, "p1"), (1, "p2"), (6, "p1")],
    );
    assert_eq!(state.winners(), Some(&["p1".to_string()][..]));
}

#[test]
fn test_second_player_win() {
    let state = play(
        new_game(42, "p1", "p2"),
        &[(0, "p1"), (3, "p2"), (1, "p1"), (4, "p2"), (6, "p1"), (5, "p2")],
    );
    assert!(state.game_over());
    assert_eq!(state.winners(), Some(&["p2".to_string()][..]));
}

#[test]
fn test_current_player_frozen_on_win() {
    let state = top_row_win();
    assert_eq!(state.current_player_id(), "p1");
    assert_eq!(state.turn(), 6);
}

#[test]
fn test_full_board_draw() {
    let engine = TicTacToeEngine::new();
    let state = play(
        new_game(42, "p1", "p2"),
        &[
            (4, "p1"),
            (0, "p2"),
            (2, "p1"),
            (6, "p2"),
            (3, "p1"),
            (5, "p2"),
            (1, "p1"),
            (7, "p2"),
            (8, "p1"),
        ],
    );
    assert!(state.game_over());
    assert_eq!(state.winners(), None);
    assert_eq!(engine.winning_line(&state), None);
    assert_eq!(state.current_player_id(), "p1");
    assert_eq!(state.turn(), 10);
}

#[test]
fn test_no_winning_line_on_fresh_board() {
    let engine = TicTacToeEngine::new();
    assert_eq!(engine.winning_line(&new_game(42, "p1", "p2")), None);
}

// ─────────────────────────────────────────────────────────────
//  Views and queries
// ─────────────────────────────────────────────────────────────

#[test]
fn test_player_view_is_identity() {
    let engine = TicTacToeEngine::new();
    let state = play(new_game(42, "p1", "p2"), &[(4, "p1")]);
    assert_eq!(engine.player_view(&state, "p1"), state);
    assert_eq!(engine.player_view(&state, "p2"), state);
}

#[test]
fn test_query_helpers() {
    let engine = TicTacToeEngine::new();
    let state = new_game(42, "p1", "p2");
    assert!(!engine.is_game_over(&state));
    assert_eq!(engine.winners(&state), None);
    assert_eq!(engine.current_player(&state), "p1");

    let state = play(state, &[(0, "p1")]);
    assert_eq!(engine.current_player(&state), "p2");

    let state = top_row_win();
    assert!(engine.is_game_over(&state));
    assert_eq!(engine.winners(&state), Some(&["p1".to_string()][..]));
}

#[test]
fn test_alternation_holds_through_a_whole_game() {
    let engine = TicTacToeEngine::new();
    let mut state = new_game(7, "a", "b");
    while !engine.is_game_over(&state) {
        let mover = engine.current_player(&state).to_string();
        let action = engine.valid_actions(&state, &mover)[0];
        let next = engine.apply_action(&state, &action, &mover).unwrap();
        if next.game_over() {
            assert_eq!(next.current_player_id(), mover);
        } else {
            assert_ne!(next.current_player_id(), mover);
        }
        state = next;
    }
}

// ─────────────────────────────────────────────────────────────
//  Serialization shape
// ─────────────────────────────────────────────────────────────

#[test]
fn test_state_json_shape() {
    let state = play(new_game(42, "p1", "p2"), &[(4, "p1")]);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["board"][4], "X");
    assert!(json["board"][0].is_null());
    assert_eq!(json["currentPlayerId"], "p2");
    assert_eq!(json["playerIds"][1], "p2");
    assert_eq!(json["symbols"]["p2"], "O");
    assert_eq!(json["gameOver"], false);
    assert!(json["winners"].is_null());
    assert_eq!(json["turn"], 2);
    assert_eq!(json["rngState"], 42);

    let back: TicTacToeState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_action_json_shape() {
    let action: TicTacToeAction =
        serde_json::from_str(r#"{"type":"place","position":4}"#).unwrap();
    assert_eq!(action, TicTacToeAction::place(4));
    assert!(serde_json::from_str::<TicTacToeAction>(r#"{"type":"remove","position":4}"#).is_err());
}
