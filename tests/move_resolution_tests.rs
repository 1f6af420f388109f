//! Integration tests for move resolution through the game state.

use block_pusher::{
    Direction, GameConfig, GameEvent, GameState, Level, MoveResult, Position, RejectReason,
};

/// Builds a game from explicit world positions on the default 16x12 board.
fn game_with(mover: Position, obstacles: &[Position]) -> GameState {
    let mut state = GameState::new(
        Level::default_level().expect("built-in level parses"),
        GameConfig::default(),
    )
    .expect("built-in level fits");
    state.mover = mover;
    state.obstacles = obstacles.to_vec();
    state
}

#[test]
fn test_push_up_into_free_cell() {
    let mut state = game_with(Position::new(136, 516), &[Position::new(136, 468)]);

    let result = state.handle_move(Direction::Up);

    assert!(matches!(result, MoveResult::Accepted(_)));
    assert_eq!(state.mover, Position::new(136, 468));
    assert_eq!(state.obstacles, vec![Position::new(136, 420)]);
    assert_eq!(state.move_count, 1);
    assert!(state.is_busy());
}

#[test]
fn test_push_up_blocked_by_second_obstacle() {
    let obstacles = [Position::new(136, 468), Position::new(136, 420)];
    let mut state = game_with(Position::new(136, 516), &obstacles);

    let result = state.handle_move(Direction::Up);

    assert_eq!(result, MoveResult::Rejected(RejectReason::ObstacleBlocked));
    assert_eq!(state.mover, Position::new(136, 516));
    assert_eq!(state.obstacles, obstacles.to_vec());
    assert_eq!(state.move_count, 0);
    assert!(!state.is_busy());
}

#[test]
fn test_push_against_boundary() {
    let mut state = game_with(Position::new(712, 36), &[Position::new(760, 36)]);
    state.exit = Position::new(40, 36);

    let result = state.handle_move(Direction::Right);

    assert_eq!(result, MoveResult::Rejected(RejectReason::ObstacleOutOfBounds));
    assert_eq!(state.mover, Position::new(712, 36));
    assert_eq!(state.obstacles, vec![Position::new(760, 36)]);
}

#[test]
fn test_every_edge_rejects_outward_moves() {
    let corners = [
        (Position::new(40, 36), Direction::Up),
        (Position::new(40, 36), Direction::Left),
        (Position::new(760, 564), Direction::Down),
        (Position::new(760, 564), Direction::Right),
    ];
    for (mover, direction) in corners {
        let mut state = game_with(mover, &[]);
        assert_eq!(
            state.handle_move(direction),
            MoveResult::Rejected(RejectReason::MoverOutOfBounds),
            "moving {} from {:?}",
            direction,
            mover
        );
        assert_eq!(state.mover, mover);
    }
}

#[test]
fn test_moves_serialize_through_transition() {
    let mut state = game_with(Position::new(40, 564), &[]);

    assert!(matches!(
        state.handle_move(Direction::Up),
        MoveResult::Accepted(_)
    ));
    // Key repeats during the slide are dropped, not queued
    for _ in 0..5 {
        assert_eq!(state.handle_move(Direction::Up), MoveResult::Ignored);
    }
    assert_eq!(state.move_count, 1);

    let frame = 1.0 / 60.0;
    let mut frames = 0;
    while !state.update(frame) {
        frames += 1;
        assert!(frames < 100, "transition never settled");
    }
    assert!(!state.is_busy());

    assert!(matches!(
        state.handle_move(Direction::Up),
        MoveResult::Accepted(_)
    ));
    assert_eq!(state.mover, Position::new(40, 468));
    assert_eq!(state.move_count, 2);
}

#[test]
fn test_walk_to_exit_resets_level() {
    let mut state = GameState::new(
        Level::parse("|----|\n|P..E|\n|.B..|\n|----|").unwrap(),
        GameConfig::default(),
    )
    .unwrap();
    let start_obstacles = state.obstacles.clone();

    // Push the block aside first so the reset has something to undo
    state.handle_move(Direction::Down);
    state.update(1.0);
    state.handle_move(Direction::Right);
    state.update(1.0);
    assert_ne!(state.obstacles, start_obstacles);
    state.handle_move(Direction::Up);
    state.update(1.0);
    state.handle_move(Direction::Right);
    state.update(1.0);

    let result = state.handle_move(Direction::Right);

    assert_eq!(result, MoveResult::LevelCompleted { moves: 5 });
    assert_eq!(state.mover, Position::new(40, 36));
    assert_eq!(state.obstacles, start_obstacles);
    assert_eq!(state.move_count, 0);
    assert!(!state.is_busy());

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::LevelCompleted { level: 1, moves: 5 }));
    assert_eq!(state.statistics.moves_made, 5);
    assert_eq!(state.statistics.pushes, 1);
}
