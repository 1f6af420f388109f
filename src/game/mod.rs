//! # Game Module
//!
//! Core game rules: coordinates, directions, level layouts and move resolution.
//!
//! This module contains the fundamental building blocks of the block pusher:
//! - World positions and the bounding region of the playable area
//! - The four movement directions and their unit offsets
//! - Level parsing and the move resolver
//! - Game state with the one-move-at-a-time state machine

pub mod events;
pub mod level;
pub mod resolver;
pub mod state;

pub use events::*;
pub use level::*;
pub use resolver::*;
pub use state::*;

use crate::{BlockPusherError, BlockPusherResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a 2D coordinate in world space (pixels).
///
/// # Examples
///
/// ```
/// use block_pusher::Position;
///
/// let pos = Position::new(40, 564);
/// assert_eq!(pos.x, 40);
/// assert_eq!(pos.y, 564);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the position one tile away in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::{Direction, Position};
    ///
    /// let pos = Position::new(136, 512);
    /// assert_eq!(pos.step(Direction::Up, 48), Position::new(136, 464));
    /// ```
    pub fn step(self, direction: Direction, tile_size: i32) -> Position {
        self + direction.to_delta() * tile_size
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<i32> for Position {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Directions for movement. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Unit offsets indexed by `Direction as usize`. Screen y grows downwards.
const DIRECTION_DELTAS: [Position; 4] = [
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(-1, 0),
    Position::new(1, 0),
];

impl Direction {
    /// All four directions in table order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Converts a direction to a unit position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::{Direction, Position};
    ///
    /// let delta = Direction::Up.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        DIRECTION_DELTAS[self as usize]
    }

    /// Converts a unit delta back to a direction.
    ///
    /// Returns None if the delta doesn't correspond to a valid direction.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.to_delta() == delta)
    }

    /// Lowercase name, as used in level scripts and animation keys.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = BlockPusherError;

    fn from_str(s: &str) -> BlockPusherResult<Self> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(BlockPusherError::InvalidDirection(other.to_string())),
        }
    }
}

/// Axis-aligned bounding region of the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl GameRect {
    /// Creates a new rect from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner, used as the grid origin.
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Inclusive containment test on all four sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::{GameRect, Position};
    ///
    /// let rect = GameRect::new(16, 12, 768, 576);
    /// assert!(rect.contains(Position::new(784, 588)));
    /// assert!(!rect.contains(Position::new(785, 100)));
    /// ```
    pub fn contains(&self, position: Position) -> bool {
        !(position.x < self.x
            || position.x > self.x + self.width
            || position.y < self.y
            || position.y > self.y + self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
        assert_eq!(pos2 * 48, Position::new(144, 96));
    }

    #[test]
    fn test_direction_table_matches_variants() {
        assert_eq!(Direction::Up.to_delta(), Position::new(0, -1));
        assert_eq!(Direction::Down.to_delta(), Position::new(0, 1));
        assert_eq!(Direction::Left.to_delta(), Position::new(-1, 0));
        assert_eq!(Direction::Right.to_delta(), Position::new(1, 0));
    }

    #[test]
    fn test_direction_delta_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_delta(direction.to_delta()), Some(direction));
            assert_eq!(
                direction.to_delta() + direction.opposite().to_delta(),
                Position::origin()
            );
        }
        assert_eq!(Direction::from_delta(Position::new(1, 1)), None);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(Direction::Down.to_string(), "down");
        assert!(matches!(
            "diagonal".parse::<Direction>(),
            Err(BlockPusherError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_step_uses_tile_size() {
        let pos = Position::new(40, 564);
        assert_eq!(pos.step(Direction::Right, 48), Position::new(88, 564));
        assert_eq!(pos.step(Direction::Down, 48), Position::new(40, 612));
    }

    #[test]
    fn test_rect_bounds_are_inclusive() {
        let rect = GameRect::new(16, 12, 768, 576);
        assert!(rect.contains(Position::new(16, 12)));
        assert!(rect.contains(Position::new(784, 588)));
        assert!(!rect.contains(Position::new(15, 12)));
        assert!(!rect.contains(Position::new(16, 11)));
        assert!(!rect.contains(Position::new(784, 589)));
    }
}
