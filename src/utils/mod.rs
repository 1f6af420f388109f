//! # Utilities Module
//!
//! Small numeric helpers shared by the transition and animation code.

pub mod math;

pub use math::*;
