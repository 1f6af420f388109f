//! # Game Configuration
//!
//! Default constants and the serializable [`GameConfig`] loaded from JSON.

use crate::game::GameRect;
use crate::{BlockPusherError, BlockPusherResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tile edge length in pixels
pub const DEFAULT_TILE_SIZE: i32 = 48;

/// Playable area in window coordinates
pub const DEFAULT_GAME_RECT: GameRect = GameRect {
    x: 16,
    y: 12,
    width: 768,
    height: 576,
};

/// Window width in pixels
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;

/// Window height in pixels, including the HUD panel below the play area
pub const DEFAULT_WINDOW_HEIGHT: i32 = 672;

/// Frames per second the transition length is expressed against
pub const REFERENCE_FPS: f32 = 60.0;

/// Length of the slide transition in reference frames
pub const TRANSITION_FRAMES: u32 = 15;

/// Playback rate of the walk animation
pub const WALK_ANIMATION_FPS: f32 = 10.0;

/// Default directory searched for sprite images
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Runtime configuration for a game session.
///
/// # Examples
///
/// ```
/// use block_pusher::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.tile_size, 48);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tile edge length in pixels
    pub tile_size: i32,
    /// Bounding region of the playable area
    pub game_rect: GameRect,
    /// Duration of the slide transition in seconds
    pub transition_secs: f32,
    /// Window width in pixels
    pub window_width: i32,
    /// Window height in pixels
    pub window_height: i32,
    /// Directory containing `block.png` and `pusher.png`
    pub asset_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            game_rect: DEFAULT_GAME_RECT,
            transition_secs: TRANSITION_FRAMES as f32 / REFERENCE_FPS,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
        }
    }
}

impl GameConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> BlockPusherResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> BlockPusherResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Number of grid columns inside the game rect.
    pub fn columns(&self) -> i32 {
        self.game_rect.width / self.tile_size
    }

    /// Number of grid rows inside the game rect.
    pub fn rows(&self) -> i32 {
        self.game_rect.height / self.tile_size
    }

    /// Checks that the values describe a usable grid.
    pub fn validate(&self) -> BlockPusherResult<()> {
        if self.tile_size <= 0 {
            return Err(BlockPusherError::InvalidConfig(format!(
                "tile size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.game_rect.width <= 0 || self.game_rect.height <= 0 {
            return Err(BlockPusherError::InvalidConfig(
                "game rect must have a positive size".to_string(),
            ));
        }
        if self.game_rect.width % self.tile_size != 0 || self.game_rect.height % self.tile_size != 0
        {
            return Err(BlockPusherError::InvalidConfig(format!(
                "game rect {}x{} is not a multiple of tile size {}",
                self.game_rect.width, self.game_rect.height, self.tile_size
            )));
        }
        let rect = &self.game_rect;
        // One step past any edge must still be representable
        let x_fits = rect.x.checked_sub(self.tile_size).is_some()
            && rect
                .x
                .checked_add(rect.width)
                .and_then(|right| right.checked_add(self.tile_size))
                .is_some();
        let y_fits = rect.y.checked_sub(self.tile_size).is_some()
            && rect
                .y
                .checked_add(rect.height)
                .and_then(|bottom| bottom.checked_add(self.tile_size))
                .is_some();
        if !x_fits || !y_fits {
            return Err(BlockPusherError::InvalidConfig(format!(
                "game rect at ({}, {}) sized {}x{} leaves the coordinate range",
                rect.x, rect.y, rect.width, rect.height
            )));
        }
        if self.transition_secs.is_nan() || self.transition_secs <= 0.0 {
            return Err(BlockPusherError::InvalidConfig(format!(
                "transition length must be positive, got {}",
                self.transition_secs
            )));
        }
        Ok(())
    }
}
