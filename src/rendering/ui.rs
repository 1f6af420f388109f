//! # User Interface Elements
//!
//! Heads-up display: level number, move counter, messages and controls help.

use crate::game::{GameRect, GameState};
use macroquad::prelude::*;

/// Lines shown by the help toggle.
pub const CONTROLS_HELP: [&str; 2] = [
    "Arrows/WASD: Move    R: Restart level",
    "F1: Toggle help    ESC: Quit",
];

/// Gap between the bottom of the play area and the HUD panel.
pub const PANEL_GAP: f32 = 8.0;

/// Height of one HUD text line.
pub const LINE_HEIGHT: f32 = 20.0;

/// Text lines per HUD column.
pub const PANEL_LINES: usize = 3;

/// Heads-up display drawn in a panel below the play area.
#[derive(Debug, Clone)]
pub struct HUD {
    /// Message history, oldest first
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Number of recent messages drawn
    pub visible_messages: usize,
    /// Whether the controls help is shown
    pub show_help: bool,
}

impl Default for HUD {
    fn default() -> Self {
        Self::new()
    }
}

impl HUD {
    /// Creates a new HUD with an empty message log.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_messages: 50,
            visible_messages: PANEL_LINES,
            show_help: false,
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    pub fn toggle_help(&mut self) -> bool {
        self.show_help = !self.show_help;
        self.show_help
    }

    /// Status text for the top line.
    pub fn status_line(game_state: &GameState) -> String {
        format!(
            "Level: {}    Moves: {}",
            game_state.level_number(),
            game_state.move_count
        )
    }

    /// The most recent messages, oldest first.
    pub fn recent_messages(&self) -> &[String] {
        let start = self.messages.len().saturating_sub(self.visible_messages);
        &self.messages[start..]
    }

    /// Top-left corner of the panel, just below `rect`.
    pub fn panel_origin(rect: &GameRect) -> (f32, f32) {
        (rect.x as f32, (rect.y + rect.height) as f32 + PANEL_GAP)
    }

    /// Bottom edge of the panel below `rect`.
    pub fn panel_bottom(rect: &GameRect) -> f32 {
        Self::panel_origin(rect).1 + LINE_HEIGHT * PANEL_LINES as f32
    }

    /// Draws the HUD below the play area so it never covers tiles.
    ///
    /// Status and help fill the left column, recent messages the right one.
    pub fn render(&self, game_state: &GameState, rect: &GameRect) {
        let (x, y) = Self::panel_origin(rect);
        let message_x = x + rect.width as f32 / 2.0;

        let mut line_y = y + LINE_HEIGHT;
        draw_text(&Self::status_line(game_state), x, line_y, 24.0, WHITE);
        if self.show_help {
            for line in CONTROLS_HELP {
                line_y += LINE_HEIGHT;
                draw_text(line, x, line_y, 18.0, LIGHTGRAY);
            }
        }

        let mut line_y = y + LINE_HEIGHT;
        for message in self.recent_messages() {
            draw_text(message, message_x, line_y, 18.0, YELLOW);
            line_y += LINE_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_history_is_bounded() {
        let mut hud = HUD::new();
        hud.max_messages = 3;
        for i in 0..5 {
            hud.add_message(format!("message {}", i));
        }
        assert_eq!(hud.messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_recent_messages() {
        let mut hud = HUD::new();
        hud.add_message("only".to_string());
        assert_eq!(hud.recent_messages(), ["only".to_string()]);

        for i in 0..4 {
            hud.add_message(format!("m{}", i));
        }
        assert_eq!(hud.recent_messages(), ["m1", "m2", "m3"]);
    }

    #[test]
    fn test_panel_sits_between_play_area_and_window_edge() {
        let rect = crate::config::DEFAULT_GAME_RECT;
        let (x, y) = HUD::panel_origin(&rect);
        assert_eq!(x, rect.x as f32);
        assert!(y > (rect.y + rect.height) as f32);
        assert!(HUD::panel_bottom(&rect) <= crate::config::DEFAULT_WINDOW_HEIGHT as f32);
    }

    #[test]
    fn test_status_line() {
        let mut state = GameState::new_default().unwrap();
        assert_eq!(HUD::status_line(&state), "Level: 1    Moves: 0");
        state.handle_move(crate::Direction::Up);
        assert_eq!(HUD::status_line(&state), "Level: 1    Moves: 1");
    }
}
