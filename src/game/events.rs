//! # Game Events
//!
//! Events emitted by [`GameState`](crate::GameState) for the presentation layer
//! and statistics.

use crate::game::{Direction, Position, RejectReason};
use serde::{Deserialize, Serialize};

/// Something that happened during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The mover took one step
    MoverMoved {
        direction: Direction,
        from: Position,
        to: Position,
    },
    /// An obstacle was pushed one tile
    ObstaclePushed {
        index: usize,
        from: Position,
        to: Position,
    },
    /// A move was refused
    MoveRejected {
        direction: Direction,
        reason: RejectReason,
    },
    /// The mover stepped onto the exit
    LevelCompleted { level: u32, moves: u32 },
    /// All entities were reinitialised from the starting layout
    LevelReset { level: u32 },
    /// The slide transition settled and new moves are accepted again
    TransitionFinished,
}

impl GameEvent {
    /// Short text for the message log, if the event is worth showing.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::MoveRejected { reason, .. } => Some(reason.to_string()),
            GameEvent::LevelCompleted { level, moves } => {
                Some(format!("Level {} complete in {} moves!", level, moves))
            }
            GameEvent::LevelReset { level } => Some(format!("Level {} restarted", level)),
            _ => None,
        }
    }
}
