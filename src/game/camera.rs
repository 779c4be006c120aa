//! Camera / viewport mapping
//!
//! A stateless per-frame projection from the player position to the
//! world-to-screen translation. `screen = world - offset`.

use macroquad::prelude::Vec2;
use serde::{Serialize, Deserialize};

/// How the visible window relates to the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraPolicy {
    /// The world is exactly the viewport; nothing scrolls
    #[default]
    Fixed,
    /// The world has its own size; the camera centers on the player and
    /// stops at the world edges
    Follow,
}

/// Offset to subtract from world coordinates to get screen coordinates
pub fn camera_offset(policy: CameraPolicy, player: Vec2, viewport: Vec2, world: Vec2) -> Vec2 {
    match policy {
        CameraPolicy::Fixed => Vec2::ZERO,
        CameraPolicy::Follow => Vec2::new(
            follow_axis(player.x, viewport.x, world.x),
            follow_axis(player.y, viewport.y, world.y),
        ),
    }
}

fn follow_axis(center: f32, view: f32, world: f32) -> f32 {
    if world <= view {
        return 0.0;
    }
    (center - view * 0.5).clamp(0.0, world - view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_has_no_offset() {
        let off = camera_offset(CameraPolicy::Fixed, Vec2::new(900.0, 700.0), Vec2::new(800.0, 600.0), Vec2::new(2000.0, 2000.0));
        assert_eq!(off, Vec2::ZERO);
    }

    #[test]
    fn test_follow_centers_player() {
        let off = camera_offset(CameraPolicy::Follow, Vec2::new(1000.0, 1000.0), Vec2::new(800.0, 600.0), Vec2::new(2000.0, 2000.0));
        assert_eq!(off, Vec2::new(600.0, 700.0));
    }

    #[test]
    fn test_follow_clamps_to_world() {
        let view = Vec2::new(800.0, 600.0);
        let world = Vec2::new(2000.0, 1500.0);

        let near_origin = camera_offset(CameraPolicy::Follow, Vec2::new(50.0, 50.0), view, world);
        assert_eq!(near_origin, Vec2::ZERO);

        let far_corner = camera_offset(CameraPolicy::Follow, Vec2::new(1990.0, 1490.0), view, world);
        assert_eq!(far_corner, Vec2::new(1200.0, 900.0));
    }

    #[test]
    fn test_follow_small_world_does_not_scroll() {
        let off = camera_offset(CameraPolicy::Follow, Vec2::new(300.0, 900.0), Vec2::new(800.0, 600.0), Vec2::new(600.0, 2000.0));
        assert_eq!(off.x, 0.0);
        assert_eq!(off.y, 600.0);
    }
}
