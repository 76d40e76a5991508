//! Tests for loading the playlab config file.

use playlab::PlaylabConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlaylabConfig::load_or_default(dir.path().join("playlab.toml")).unwrap();

    assert_eq!(config, PlaylabConfig::default());
    assert_eq!(config.default_game(), "tictactoe");
    assert_eq!(*config.default_seed(), 42);
    assert_eq!(config.player_ids(), &vec!["player1".to_string(), "player2".to_string()]);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = config_file(
        r#"
default_game = "tictactoe"
default_seed = 1234
player_ids = ["alice", "bob"]
log_filter = "playlab=debug"
"#,
    );

    let config = PlaylabConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.default_seed(), 1234);
    assert_eq!(config.player_ids(), &vec!["alice".to_string(), "bob".to_string()]);
    assert_eq!(config.log_filter(), "playlab=debug");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = config_file("player_ids = [\"ann\", \"ben\"]\n");

    let config = PlaylabConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.player_ids(), &vec!["ann".to_string(), "ben".to_string()]);
    assert_eq!(*config.default_seed(), 42);
    assert_eq!(config.default_game(), "tictactoe");
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("default_seed = \"not a number\"\n");

    let err = PlaylabConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_env_override_beats_file() {
    let file = config_file("default_seed = 1\n");

    let config = PlaylabConfig::from_file(file.path())
        .unwrap()
        .with_seed_override(Some("99"));
    assert_eq!(*config.default_seed(), 99);
}
