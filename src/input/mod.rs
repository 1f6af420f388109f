//! # Input Module
//!
//! Keyboard handling for player interactions.

use crate::game::Direction;
use macroquad::prelude::*;

/// Keys checked each frame, in priority order.
const BOUND_KEYS: [KeyCode; 11] = [
    KeyCode::Escape,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
    KeyCode::R,
    KeyCode::F1,
];

/// Input handler for processing player commands.
///
/// Converts key presses into [`PlayerInput`] values. Only fresh presses count,
/// so holding a key produces one move per press.
pub struct InputHandler {
    /// Whether WASD moves the player in addition to the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_pusher::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.wasd_enabled);
    /// ```
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Gets the input for a key pressed this frame, if any.
    pub fn get_input(&self) -> Option<PlayerInput> {
        BOUND_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .find_map(|&key| self.input_for_key(key))
    }

    /// Maps a single key to its player input.
    pub fn input_for_key(&self, key: KeyCode) -> Option<PlayerInput> {
        match key {
            KeyCode::Escape => Some(PlayerInput::Quit),
            KeyCode::Up => Some(PlayerInput::Move(Direction::Up)),
            KeyCode::Down => Some(PlayerInput::Move(Direction::Down)),
            KeyCode::Left => Some(PlayerInput::Move(Direction::Left)),
            KeyCode::Right => Some(PlayerInput::Move(Direction::Right)),
            KeyCode::W if self.wasd_enabled => Some(PlayerInput::Move(Direction::Up)),
            KeyCode::S if self.wasd_enabled => Some(PlayerInput::Move(Direction::Down)),
            KeyCode::A if self.wasd_enabled => Some(PlayerInput::Move(Direction::Left)),
            KeyCode::D if self.wasd_enabled => Some(PlayerInput::Move(Direction::Right)),
            KeyCode::R => Some(PlayerInput::Restart),
            KeyCode::F1 => Some(PlayerInput::Help),
            _ => None,
        }
    }
}

/// Player input types that can be processed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one tile in a direction
    Move(Direction),
    /// Restart the level from its starting layout
    Restart,
    /// Show help information
    Help,
    /// Quit the game
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.input_for_key(KeyCode::Up),
            Some(PlayerInput::Move(Direction::Up))
        );
        assert_eq!(
            handler.input_for_key(KeyCode::Right),
            Some(PlayerInput::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_can_be_disabled() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.input_for_key(KeyCode::A),
            Some(PlayerInput::Move(Direction::Left))
        );
        handler.wasd_enabled = false;
        assert_eq!(handler.input_for_key(KeyCode::A), None);
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.input_for_key(KeyCode::Escape), Some(PlayerInput::Quit));
        assert_eq!(handler.input_for_key(KeyCode::R), Some(PlayerInput::Restart));
        assert_eq!(handler.input_for_key(KeyCode::Space), None);
    }
}
