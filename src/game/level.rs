//! # Level Loading
//!
//! Text-grid level format and conversion from grid cells to world positions.
//!
//! Each line is one grid row. `P` marks the mover start, `B` an obstacle,
//! `E` the exit, and `.` or a space an empty cell. Border characters `|` and
//! `-` are stripped before parsing, so framed levels read naturally:
//!
//! ```text
//! |-----|
//! |...E.|
//! |.B...|
//! |P....|
//! |-----|
//! ```

use crate::config::GameConfig;
use crate::game::Position;
use crate::{BlockPusherError, BlockPusherResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Text of the level shipped with the game.
pub const DEFAULT_LEVEL: &str = include_str!("../../levels/level1.txt");

const BORDER_CHARS: [char; 2] = ['|', '-'];

/// A level's starting layout in grid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Display name, usually the file stem
    pub name: String,
    /// Width of the widest row, in tiles
    pub width: i32,
    /// Number of rows, in tiles
    pub height: i32,
    pub mover_start: Position,
    pub obstacle_starts: Vec<Position>,
    pub exit: Position,
}

/// A level's starting layout in world coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub mover: Position,
    pub obstacles: Vec<Position>,
    pub exit: Position,
}

impl Level {
    /// Parses a level from its text grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::{Level, Position};
    ///
    /// let level = Level::parse("|---|\n|..E|\n|PB.|\n|---|").unwrap();
    /// assert_eq!(level.mover_start, Position::new(0, 1));
    /// assert_eq!(level.obstacle_starts, vec![Position::new(1, 1)]);
    /// assert_eq!(level.exit, Position::new(2, 0));
    /// ```
    pub fn parse(text: &str) -> BlockPusherResult<Self> {
        let mut mover_start = None;
        let mut exit = None;
        let mut obstacle_starts = Vec::new();
        let mut width = 0;
        let mut y = 0;

        for (line_index, raw) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let row: String = raw
                .trim_end_matches('\r')
                .chars()
                .filter(|c| !BORDER_CHARS.contains(c))
                .collect();

            // Frame rows vanish entirely; blank lines outside the frame are skipped too
            if row.is_empty() || (row.trim().is_empty() && !raw.contains('|')) {
                continue;
            }

            for (x, cell) in row.chars().enumerate() {
                let grid = Position::new(x as i32, y);
                match cell {
                    '.' | ' ' => {}
                    'B' => obstacle_starts.push(grid),
                    'P' => {
                        if mover_start.replace(grid).is_some() {
                            return Err(BlockPusherError::LevelParse {
                                line: line_number,
                                message: "more than one mover start 'P'".to_string(),
                            });
                        }
                    }
                    'E' => {
                        if exit.replace(grid).is_some() {
                            return Err(BlockPusherError::LevelParse {
                                line: line_number,
                                message: "more than one exit 'E'".to_string(),
                            });
                        }
                    }
                    other => {
                        return Err(BlockPusherError::LevelParse {
                            line: line_number,
                            message: format!("unexpected character {:?} in column {}", other, x),
                        });
                    }
                }
            }

            width = width.max(row.chars().count() as i32);
            y += 1;
        }

        if y == 0 {
            return Err(BlockPusherError::InvalidLevel("level has no rows".to_string()));
        }
        let mover_start = mover_start
            .ok_or_else(|| BlockPusherError::InvalidLevel("no mover start 'P'".to_string()))?;
        let exit = exit.ok_or_else(|| BlockPusherError::InvalidLevel("no exit 'E'".to_string()))?;

        Ok(Self {
            name: "Level 1".to_string(),
            width,
            height: y,
            mover_start,
            obstacle_starts,
            exit,
        })
    }

    /// Reads a level file. The file stem becomes the level name.
    pub fn load(path: impl AsRef<Path>) -> BlockPusherResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut level = Self::parse(&text)?;
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            level.name = stem.to_string();
        }
        log::info!(
            "Loaded level '{}' ({}x{}, {} blocks) from {}",
            level.name,
            level.width,
            level.height,
            level.obstacle_starts.len(),
            path.display()
        );
        Ok(level)
    }

    /// The built-in first level.
    pub fn default_level() -> BlockPusherResult<Self> {
        Self::parse(DEFAULT_LEVEL)
    }

    /// Checks that the grid fits inside the configured playable area.
    pub fn validate(&self, config: &GameConfig) -> BlockPusherResult<()> {
        if self.width > config.columns() || self.height > config.rows() {
            return Err(BlockPusherError::InvalidLevel(format!(
                "level '{}' is {}x{} tiles but the play area holds {}x{}",
                self.name,
                self.width,
                self.height,
                config.columns(),
                config.rows()
            )));
        }

        let mut occupied = HashSet::new();
        let entities = std::iter::once(("mover start", self.mover_start))
            .chain(std::iter::once(("exit", self.exit)))
            .chain(self.obstacle_starts.iter().map(|&cell| ("block", cell)));
        for (kind, cell) in entities {
            if !(0..self.width).contains(&cell.x) || !(0..self.height).contains(&cell.y) {
                return Err(BlockPusherError::InvalidLevel(format!(
                    "{} at ({}, {}) lies outside the {}x{} grid of level '{}'",
                    kind, cell.x, cell.y, self.width, self.height, self.name
                )));
            }
            if !occupied.insert(cell) {
                return Err(BlockPusherError::InvalidLevel(format!(
                    "{} at ({}, {}) shares its cell with another entity in level '{}'",
                    kind, cell.x, cell.y, self.name
                )));
            }
        }
        Ok(())
    }

    /// Converts the starting layout to world coordinates.
    pub fn layout(&self, config: &GameConfig) -> Layout {
        Layout {
            mover: grid_to_world(self.mover_start, config),
            obstacles: self
                .obstacle_starts
                .iter()
                .map(|&grid| grid_to_world(grid, config))
                .collect(),
            exit: grid_to_world(self.exit, config),
        }
    }
}

/// World position of the centre of a grid cell.
///
/// # Examples
///
/// ```
/// use block_pusher::{grid_to_world, GameConfig, Position};
///
/// let config = GameConfig::default();
/// assert_eq!(grid_to_world(Position::new(0, 11), &config), Position::new(40, 564));
/// ```
pub fn grid_to_world(grid: Position, config: &GameConfig) -> Position {
    let half = config.tile_size / 2;
    grid * config.tile_size + config.game_rect.origin() + Position::new(half, half)
}
