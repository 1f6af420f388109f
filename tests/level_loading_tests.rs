//! Integration tests for reading levels and configuration from disk.

use block_pusher::{BlockPusherError, GameConfig, GameState, Level, Position};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_load_level_file_uses_file_stem_as_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corridor.txt");
    std::fs::write(&path, "|------|\n|P.B..E|\n|------|\n").unwrap();

    let level = Level::load(&path).unwrap();

    assert_eq!(level.name, "corridor");
    assert_eq!(level.width, 6);
    assert_eq!(level.height, 1);
    assert_eq!(level.obstacle_starts, vec![Position::new(2, 0)]);
}

#[test]
fn test_load_windows_line_endings() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "|---|\r\n|P.E|\r\n|.B.|\r\n|---|\r\n").unwrap();

    let level = Level::load(file.path()).unwrap();

    assert_eq!(level.width, 3);
    assert_eq!(level.height, 2);
    assert_eq!(level.exit, Position::new(2, 0));
}

#[test]
fn test_missing_level_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = Level::load(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(BlockPusherError::Io(_))));
}

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "tile_size": 24, "game_rect": {{ "x": 0, "y": 0, "width": 240, "height": 240 }}, "transition_secs": 0.1 }}"#
    )
    .unwrap();

    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.tile_size, 24);
    assert_eq!(config.columns(), 10);

    let state = GameState::new(Level::parse("P.E").unwrap(), config).unwrap();
    assert_eq!(state.mover, Position::new(12, 12));
    assert_eq!(state.exit, Position::new(60, 12));
}

#[test]
fn test_invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tile_size": 0 }}"#).unwrap();

    assert!(matches!(
        GameConfig::load(file.path()),
        Err(BlockPusherError::InvalidConfig(_))
    ));
}
