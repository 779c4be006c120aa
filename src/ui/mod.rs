//! Immediate-mode UI helpers for the overlays
//!
//! Design principles:
//! - Immediate mode (no retained widget state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod widgets;
mod input;
pub mod theme;

pub use rect::*;
pub use widgets::*;
pub use input::*;
