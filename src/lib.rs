//! # Block Pusher
//!
//! A small tile-based puzzle game in which the player pushes blocks around a
//! bounded grid looking for the exit tile.
//!
//! ## Architecture Overview
//!
//! The crate separates pure game rules from the macroquad front end:
//!
//! - **Game**: positions, directions, level layouts and the move resolver
//! - **Game State**: entity positions, the move state machine and statistics
//! - **Input**: keyboard mapping to player inputs
//! - **Rendering**: sprites, walk animation, sliding transitions and the HUD
//!
//! Everything under [`game`] is deterministic and runs without a window, which
//! keeps the rules testable in plain `cargo test`.

pub mod config;
pub mod game;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use config::*;
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

// Explicit re-exports for commonly used types
#[rustfmt::skip]
pub use game::{
    // From mod
    Direction, GameRect, Position,
    // From resolver
    resolve_move, AcceptedMove, MoveOutcome, RejectReason,
    // From events
    GameEvent,
    // From level
    Layout, Level,
    // From state
    GameState, GameStatistics, MoveResult, MoveState, Transition,
};

pub use rendering::{MacroquadDisplay, WalkAnimation, HUD};

/// Core error type for the block pusher game.
#[derive(thiserror::Error, Debug)]
pub enum BlockPusherError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Level text could not be parsed
    #[error("Level parse error on line {line}: {message}")]
    LevelParse { line: usize, message: String },

    /// Level parsed but does not fit the game configuration
    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    /// Direction name outside up/down/left/right
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the block pusher codebase.
pub type BlockPusherResult<T> = Result<T, BlockPusherError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
