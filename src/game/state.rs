//! # Game State Module
//!
//! Central game state: entity positions, the move state machine, the move
//! counter and play statistics.
//!
//! Moves are processed one at a time. An accepted move commits the new
//! positions immediately and starts a [`Transition`] that the renderer uses to
//! slide sprites into place; until it settles, further move requests are
//! dropped.

use crate::config::GameConfig;
use crate::game::{
    resolve_move, AcceptedMove, Direction, GameEvent, Level, MoveOutcome, Position, RejectReason,
};
use crate::utils::lerp;
use crate::{BlockPusherError, BlockPusherResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of the only level; every win restarts it.
pub const CURRENT_LEVEL_NUMBER: u32 = 1;

/// Central game state containing all entity positions and systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session configuration
    pub config: GameConfig,
    /// Starting layout the level is reset to
    pub level: Level,
    /// Current mover position
    pub mover: Position,
    /// Current obstacle positions, in level order
    pub obstacles: Vec<Position>,
    /// Exit position
    pub exit: Position,
    /// Idle or settling a transition
    pub move_state: MoveState,
    /// Accepted moves since the level was last (re)initialised
    pub move_count: u32,
    /// Statistics across resets
    pub statistics: GameStatistics,
    /// Events not yet consumed by the presentation layer
    #[serde(skip)]
    events: Vec<GameEvent>,
}

/// Whether a move may be processed right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveState {
    /// Ready for the next move
    Idle,
    /// Sprites are sliding; move requests are ignored
    Transitioning(Transition),
}

/// The timed slide of the entities moved by an accepted move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub accepted: AcceptedMove,
    /// Seconds since the transition started
    pub elapsed: f32,
    /// Total length in seconds
    pub duration: f32,
}

impl Transition {
    /// Starts a transition for an accepted move.
    pub fn new(accepted: AcceptedMove, duration: f32) -> Self {
        Self {
            accepted,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advances the clock. Time beyond the duration is discarded.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Fraction completed in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Whether obstacle `index` is sliding in this transition.
    pub fn moves_obstacle(&self, index: usize) -> bool {
        self.accepted.pushed.is_some_and(|p| p.index == index)
    }

    /// Pixel offset from a moving entity's committed position to where it
    /// should be drawn this frame.
    pub fn slide_offset(&self, tile_size: i32) -> (f32, f32) {
        let delta = self.accepted.direction.to_delta() * tile_size;
        let remaining = lerp(1.0, 0.0, self.progress());
        (-delta.x as f32 * remaining, -delta.y as f32 * remaining)
    }
}

/// Outcome of a move request as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// A transition was still running; nothing happened
    Ignored,
    /// The move was refused; nothing moved
    Rejected(RejectReason),
    /// Entities moved and a transition started
    Accepted(AcceptedMove),
    /// The mover reached the exit and the level was reset
    LevelCompleted { moves: u32 },
}

/// Play statistics, kept across level resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Accepted moves
    pub moves_made: u64,
    /// Accepted moves that pushed a block
    pub pushes: u64,
    /// Moves refused by bounds or blocking
    pub rejected_moves: u64,
    /// Times the exit was reached
    pub levels_completed: u32,
    /// Level reinitialisations, from wins and manual restarts
    pub level_resets: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MoverMoved { .. } => self.moves_made += 1,
            GameEvent::ObstaclePushed { .. } => self.pushes += 1,
            GameEvent::MoveRejected { .. } => self.rejected_moves += 1,
            GameEvent::LevelCompleted { .. } => self.levels_completed += 1,
            GameEvent::LevelReset { .. } => self.level_resets += 1,
            GameEvent::TransitionFinished => {}
        }
    }
}

impl GameState {
    /// Creates a game state for `level` with its starting layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::{GameConfig, GameState, Level};
    ///
    /// let level = Level::default_level().unwrap();
    /// let state = GameState::new(level, GameConfig::default()).unwrap();
    /// assert_eq!(state.move_count, 0);
    /// assert!(!state.is_busy());
    /// ```
    pub fn new(level: Level, config: GameConfig) -> BlockPusherResult<Self> {
        config.validate()?;
        level.validate(&config)?;
        let layout = level.layout(&config);

        log::info!(
            "Starting '{}' with {} blocks",
            level.name,
            layout.obstacles.len()
        );

        Ok(Self {
            config,
            level,
            mover: layout.mover,
            obstacles: layout.obstacles,
            exit: layout.exit,
            move_state: MoveState::Idle,
            move_count: 0,
            statistics: GameStatistics::new(),
            events: Vec::new(),
        })
    }

    /// Creates a game on the built-in level with default configuration.
    pub fn new_default() -> BlockPusherResult<Self> {
        Self::new(Level::default_level()?, GameConfig::default())
    }

    /// Level identifier shown to the player.
    pub fn level_number(&self) -> u32 {
        CURRENT_LEVEL_NUMBER
    }

    /// True while a transition is settling.
    pub fn is_busy(&self) -> bool {
        matches!(self.move_state, MoveState::Transitioning(_))
    }

    /// The running transition, if any.
    pub fn transition(&self) -> Option<&Transition> {
        match &self.move_state {
            MoveState::Idle => None,
            MoveState::Transitioning(transition) => Some(transition),
        }
    }

    /// Processes one directional move request.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::{Direction, GameState, MoveResult, Position};
    ///
    /// let mut state = GameState::new_default().unwrap();
    /// assert!(matches!(state.handle_move(Direction::Up), MoveResult::Accepted(_)));
    /// assert_eq!(state.mover, Position::new(40, 516));
    ///
    /// // Still sliding: the next request is dropped
    /// assert_eq!(state.handle_move(Direction::Up), MoveResult::Ignored);
    /// ```
    pub fn handle_move(&mut self, direction: Direction) -> MoveResult {
        if self.is_busy() {
            log::trace!("Dropping {} move while a transition is running", direction);
            return MoveResult::Ignored;
        }

        let outcome = resolve_move(
            self.mover,
            &self.obstacles,
            self.exit,
            direction,
            &self.config.game_rect,
            self.config.tile_size,
        );

        let accepted = match outcome {
            MoveOutcome::Rejected(reason) => {
                log::debug!("Rejected {} move: {}", direction, reason);
                self.emit(GameEvent::MoveRejected { direction, reason });
                return MoveResult::Rejected(reason);
            }
            MoveOutcome::Accepted(accepted) => accepted,
        };

        self.apply(&accepted);

        if accepted.reaches_exit {
            let moves = self.move_count;
            log::info!("Level {} complete in {} moves", self.level_number(), moves);
            self.emit(GameEvent::LevelCompleted {
                level: self.level_number(),
                moves,
            });
            self.reset_level();
            return MoveResult::LevelCompleted { moves };
        }

        self.move_state =
            MoveState::Transitioning(Transition::new(accepted, self.config.transition_secs));
        MoveResult::Accepted(accepted)
    }

    /// Advances the running transition by `dt` seconds.
    ///
    /// Returns true on the frame the transition settles.
    pub fn update(&mut self, dt: f32) -> bool {
        let finished = match &mut self.move_state {
            MoveState::Idle => false,
            MoveState::Transitioning(transition) => {
                transition.advance(dt);
                transition.is_finished()
            }
        };

        if finished {
            self.move_state = MoveState::Idle;
            self.emit(GameEvent::TransitionFinished);
        }
        finished
    }

    /// Restarts the level from its starting layout.
    ///
    /// Ignored while a transition is running, like a move request.
    pub fn restart_level(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.reset_level();
        true
    }

    /// Removes and returns the pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serializes the game state to a JSON string.
    pub fn save_to_json(&self) -> BlockPusherResult<String> {
        serde_json::to_string_pretty(self).map_err(BlockPusherError::from)
    }

    /// Restores a game state from JSON produced by [`GameState::save_to_json`].
    pub fn load_from_json(json: &str) -> BlockPusherResult<Self> {
        let state: GameState = serde_json::from_str(json)?;
        state.config.validate()?;
        state.level.validate(&state.config)?;
        if state.obstacles.len() != state.level.obstacle_starts.len() {
            return Err(BlockPusherError::InvalidState(format!(
                "snapshot has {} blocks but its level has {}",
                state.obstacles.len(),
                state.level.obstacle_starts.len()
            )));
        }
        state.check_positions()?;
        Ok(state)
    }

    /// Verifies current positions are on the grid, inside the play area and
    /// never share a cell.
    fn check_positions(&self) -> BlockPusherResult<()> {
        let expected_exit = self.level.layout(&self.config).exit;
        if self.exit != expected_exit {
            return Err(BlockPusherError::InvalidState(format!(
                "exit at {:?} does not match the level exit {:?}",
                self.exit, expected_exit
            )));
        }

        let mut occupied = HashSet::new();
        let entities = std::iter::once(self.mover).chain(self.obstacles.iter().copied());
        for position in entities {
            if !self.is_on_grid(position) {
                return Err(BlockPusherError::InvalidState(format!(
                    "position {:?} is not a cell of the play area",
                    position
                )));
            }
            if !occupied.insert(position) {
                return Err(BlockPusherError::InvalidState(format!(
                    "more than one entity at {:?}",
                    position
                )));
            }
        }
        Ok(())
    }

    /// Whether `position` is the centre of a cell inside the game rect.
    fn is_on_grid(&self, position: Position) -> bool {
        let tile = self.config.tile_size;
        let rect = &self.config.game_rect;
        if !rect.contains(position) {
            return false;
        }
        let local = position - rect.origin() - Position::new(tile / 2, tile / 2);
        local.x.rem_euclid(tile) == 0
            && local.y.rem_euclid(tile) == 0
            && (0..self.config.columns()).contains(&(local.x / tile))
            && (0..self.config.rows()).contains(&(local.y / tile))
    }

    fn apply(&mut self, accepted: &AcceptedMove) {
        if let Some(pushed) = accepted.pushed {
            self.obstacles[pushed.index] = pushed.to;
            self.emit(GameEvent::ObstaclePushed {
                index: pushed.index,
                from: pushed.from,
                to: pushed.to,
            });
        }
        self.mover = accepted.mover_to;
        self.move_count += 1;
        self.emit(GameEvent::MoverMoved {
            direction: accepted.direction,
            from: accepted.mover_from,
            to: accepted.mover_to,
        });
    }

    fn reset_level(&mut self) {
        let layout = self.level.layout(&self.config);
        self.mover = layout.mover;
        self.obstacles = layout.obstacles;
        self.exit = layout.exit;
        self.move_count = 0;
        self.move_state = MoveState::Idle;
        log::info!("Level {} reset", self.level_number());
        self.emit(GameEvent::LevelReset {
            level: self.level_number(),
        });
    }

    fn emit(&mut self, event: GameEvent) {
        self.statistics.update_from_event(&event);
        self.events.push(event);
    }
}
