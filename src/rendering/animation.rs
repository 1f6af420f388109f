//! # Walk Animation
//!
//! Frame selection for the mover's spritesheet.
//!
//! The sheet holds 48x48 frames, twelve per row, one row per facing. Each
//! accepted move plays the three walk frames of its direction forward and back
//! once, at a fixed frame rate.

use crate::config::WALK_ANIMATION_FPS;
use crate::game::Direction;
use crate::utils::ping_pong_index;

/// Frames per spritesheet row.
pub const SPRITESHEET_COLUMNS: usize = 12;

/// Walk frames per direction.
pub const WALK_FRAMES: usize = 3;

/// Playback state of the mover's walk cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkAnimation {
    /// Facing of the last played walk
    pub direction: Direction,
    /// Seconds since playback started
    pub elapsed: f32,
    /// Whether a walk is currently playing
    pub playing: bool,
    /// Playback rate in frames per second
    pub fps: f32,
}

impl Default for WalkAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkAnimation {
    /// Creates an idle animation facing down.
    pub fn new() -> Self {
        Self {
            direction: Direction::Down,
            elapsed: 0.0,
            playing: false,
            fps: WALK_ANIMATION_FPS,
        }
    }

    /// First spritesheet frame of the walk cycle for `direction`.
    pub fn first_frame(direction: Direction) -> usize {
        match direction {
            Direction::Down => 0,
            Direction::Left => 12,
            Direction::Right => 24,
            Direction::Up => 36,
        }
    }

    /// Restarts playback facing `direction`.
    pub fn play(&mut self, direction: Direction) {
        self.direction = direction;
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Advances playback; stops after one forward-and-back sweep.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        self.elapsed += dt.max(0.0);
        if self.step() >= Self::sweep_len() {
            self.playing = false;
            self.elapsed = 0.0;
        }
    }

    /// Spritesheet index of the frame to draw now.
    pub fn current_frame(&self) -> usize {
        let offset = if self.playing {
            ping_pong_index(self.step(), WALK_FRAMES)
        } else {
            0
        };
        Self::first_frame(self.direction) + offset
    }

    /// Pixel source rect `(x, y, w, h)` of `frame` in a sheet of `size` tiles.
    pub fn frame_source(frame: usize, size: f32) -> (f32, f32, f32, f32) {
        let column = (frame % SPRITESHEET_COLUMNS) as f32;
        let row = (frame / SPRITESHEET_COLUMNS) as f32;
        (column * size, row * size, size, size)
    }

    fn step(&self) -> usize {
        (self.elapsed * self.fps) as usize
    }

    fn sweep_len() -> usize {
        2 * WALK_FRAMES - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_shows_first_frame() {
        let animation = WalkAnimation::new();
        assert_eq!(animation.current_frame(), 0);
    }

    #[test]
    fn test_walk_plays_forward_and_back() {
        let mut animation = WalkAnimation::new();
        animation.play(Direction::Up);

        let mut frames = Vec::new();
        for _ in 0..5 {
            frames.push(animation.current_frame());
            animation.update(0.101);
        }
        assert_eq!(frames, vec![36, 37, 38, 37, 36]);
        assert!(!animation.playing);
        assert_eq!(animation.current_frame(), 36);
    }

    #[test]
    fn test_frame_source_wraps_rows() {
        assert_eq!(WalkAnimation::frame_source(0, 48.0), (0.0, 0.0, 48.0, 48.0));
        assert_eq!(WalkAnimation::frame_source(26, 48.0), (96.0, 96.0, 48.0, 48.0));
    }
}
