//! Keyboard input
//!
//! Provides an action-based input layer. The keyboard is sampled once per
//! frame; presses are derived by diffing against the previous frame rather
//! than from event callbacks.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
