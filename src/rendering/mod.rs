//! # Rendering Module
//!
//! macroquad presentation: board drawing, the mover's walk cycle and the HUD.

pub mod animation;
pub mod display;
pub mod ui;

pub use animation::*;
pub use display::*;
pub use ui::*;
