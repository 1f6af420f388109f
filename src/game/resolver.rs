//! # Move Resolver
//!
//! Decides the outcome of a single directional move from entity positions alone.
//!
//! The resolver never mutates anything. It returns a [`MoveOutcome`] describing
//! which entities would move and where, and [`GameState`](crate::GameState)
//! applies it.

use crate::game::{Direction, GameRect, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The mover would leave the bounding region
    MoverOutOfBounds,
    /// The pushed obstacle would leave the bounding region
    ObstacleOutOfBounds,
    /// A second obstacle sits behind the pushed one
    ObstacleBlocked,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::MoverOutOfBounds => "Cannot move out of bounds",
            RejectReason::ObstacleOutOfBounds => "Cannot push block out of bounds",
            RejectReason::ObstacleBlocked => "Cannot push two blocks at once",
        };
        f.write_str(text)
    }
}

/// An obstacle displaced by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushedObstacle {
    /// Index into the obstacle list
    pub index: usize,
    pub from: Position,
    pub to: Position,
}

/// The translocation produced by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedMove {
    pub direction: Direction,
    pub mover_from: Position,
    pub mover_to: Position,
    /// The obstacle pushed along, if any
    pub pushed: Option<PushedObstacle>,
    /// Whether `mover_to` is the exit
    pub reaches_exit: bool,
}

/// Result of resolving one move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Accepted(AcceptedMove),
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns true for accepted moves.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Resolves a move of the mover by one tile in `direction`.
///
/// A mover may push at most one obstacle, and never into a cell held by a
/// second obstacle. Bounds checks are inclusive on all four sides of `rect`.
///
/// # Examples
///
/// ```
/// use block_pusher::{resolve_move, Direction, GameRect, MoveOutcome, Position};
///
/// let rect = GameRect::new(16, 12, 768, 576);
/// let obstacles = [Position::new(136, 464)];
/// let outcome = resolve_move(
///     Position::new(136, 512),
///     &obstacles,
///     Position::new(760, 36),
///     Direction::Up,
///     &rect,
///     48,
/// );
/// match outcome {
///     MoveOutcome::Accepted(accepted) => {
///         assert_eq!(accepted.mover_to, Position::new(136, 464));
///         assert_eq!(accepted.pushed.unwrap().to, Position::new(136, 416));
///     }
///     MoveOutcome::Rejected(reason) => panic!("unexpected rejection: {reason}"),
/// }
/// ```
pub fn resolve_move(
    mover: Position,
    obstacles: &[Position],
    exit: Position,
    direction: Direction,
    rect: &GameRect,
    tile_size: i32,
) -> MoveOutcome {
    let mover_to = mover.step(direction, tile_size);
    if !rect.contains(mover_to) {
        return MoveOutcome::Rejected(RejectReason::MoverOutOfBounds);
    }

    let pushed = match obstacle_at(obstacles, mover_to) {
        None => None,
        Some(index) => {
            let obstacle_to = mover_to.step(direction, tile_size);
            if !rect.contains(obstacle_to) {
                return MoveOutcome::Rejected(RejectReason::ObstacleOutOfBounds);
            }
            if obstacle_at(obstacles, obstacle_to).is_some() {
                return MoveOutcome::Rejected(RejectReason::ObstacleBlocked);
            }
            Some(PushedObstacle {
                index,
                from: mover_to,
                to: obstacle_to,
            })
        }
    };

    MoveOutcome::Accepted(AcceptedMove {
        direction,
        mover_from: mover,
        mover_to,
        pushed,
        reaches_exit: mover_to == exit,
    })
}

/// Index of the first obstacle at exactly `position`.
pub fn obstacle_at(obstacles: &[Position], position: Position) -> Option<usize> {
    obstacles.iter().position(|&o| o == position)
}
