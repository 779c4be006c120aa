//! The player character
//!
//! One entity, created at startup from `PlayerSettings` and mutated once
//! per frame by the motion integrator.

use macroquad::prelude::Vec2;
use serde::{Serialize, Deserialize};
use crate::project::PlayerSettings;
use super::collision::Aabb;

/// Animation state tag. Each state has exactly one clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
}

/// Horizontal facing; sprites are drawn mirrored when facing left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center of the player in world pixels
    pub position: Vec2,
    /// Direction applied last frame (normalized, or zero when standing)
    pub intent: Vec2,
    pub facing: Facing,
    /// Pixels per second
    pub speed: f32,
    /// Collision box size (not the sprite size)
    pub width: f32,
    pub height: f32,
    pub state: AnimState,
}

impl Player {
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            position: Vec2::new(settings.start[0], settings.start[1]),
            intent: Vec2::ZERO,
            facing: Facing::Right,
            speed: settings.speed,
            width: settings.width,
            height: settings.height,
            state: AnimState::Idle,
        }
    }

    /// Collision box centered on the position
    pub fn collision_box(&self) -> Aabb {
        Aabb::centered(self.position.x, self.position.y, self.width, self.height)
    }
}
