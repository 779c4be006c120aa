//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Scene
// =============================================================================

/// Floor color behind everything
pub const BG_COLOR: Color = Color::new(0.09, 0.10, 0.12, 1.0);

/// Faint grid lines on the floor
pub const GRID_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.04);

/// Grid spacing in world pixels
pub const GRID_SPACING: f32 = 48.0;

/// Station card fill
pub const STATION_BG: Color = Color::new(0.14, 0.15, 0.19, 0.92);

/// Station border when the player is not in range
pub const STATION_BORDER: Color = Color::new(1.0, 1.0, 1.0, 0.12);

/// Station border and prompt when the player is in range
pub const STATION_ACTIVE: Color = Color::new(0.45, 0.85, 0.55, 1.0);

/// Placeholder box drawn when a sprite sheet is missing
pub const PLAYER_FALLBACK: Color = Color::new(0.35, 0.75, 0.35, 1.0);

// =============================================================================
// Text
// =============================================================================

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.92, 1.0);

/// Secondary text
pub const TEXT_MUTED: Color = Color::new(0.6, 0.62, 0.68, 1.0);

/// Accent for links and tags
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

pub const FONT_SIZE_TITLE: f32 = 30.0;
pub const FONT_SIZE_HEADER: f32 = 20.0;
pub const FONT_SIZE_CONTENT: f32 = 17.0;
pub const FONT_SIZE_SMALL: f32 = 14.0;

// =============================================================================
// Overlays
// =============================================================================

/// Dimmed backdrop behind the modal / about panel
pub const BACKDROP: Color = Color::new(0.0, 0.0, 0.0, 0.6);

/// Modal and panel card
pub const CARD_BG: Color = Color::new(0.12, 0.12, 0.15, 1.0);

pub const CARD_BORDER: Color = Color::new(1.0, 1.0, 1.0, 0.10);

pub const BUTTON_BG: Color = Color::new(0.20, 0.21, 0.26, 1.0);

pub const BUTTON_HOVER: Color = Color::new(0.26, 0.29, 0.36, 1.0);

/// Media placeholder fill
pub const MEDIA_BG: Color = Color::new(0.08, 0.08, 0.10, 1.0);
