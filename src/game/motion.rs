//! Motion Integrator
//!
//! Turns the raw movement axis into a position delta. Diagonals are
//! normalized so every direction moves at the configured speed, and the
//! result is clamped to the walkable bounds.

use macroquad::prelude::Vec2;
use super::player::{AnimState, Facing, Player};

/// Walkable area for the player's center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl ClampBounds {
    /// Bounds for a world of the given size, keeping `margin` pixels from every edge.
    /// A world narrower than two margins collapses to its center line.
    pub fn inset(world_w: f32, world_h: f32, margin: f32) -> Self {
        let (min_x, max_x) = inset_axis(world_w, margin);
        let (min_y, max_y) = inset_axis(world_h, margin);
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.min_x, self.max_x), p.y.clamp(self.min_y, self.max_y))
    }

    #[cfg(test)]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

fn inset_axis(size: f32, margin: f32) -> (f32, f32) {
    let lo = margin;
    let hi = size - margin;
    if hi < lo {
        let mid = size * 0.5;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

/// Unit direction for a raw axis; diagonals are scaled by 1/sqrt(2)
pub fn direction(axis: (f32, f32)) -> Vec2 {
    let (mx, my) = axis;
    if mx != 0.0 && my != 0.0 {
        Vec2::new(mx, my) * std::f32::consts::FRAC_1_SQRT_2
    } else {
        Vec2::new(mx, my)
    }
}

/// Advance the player one frame.
///
/// Sets the animation state to Run iff there is movement, and only touches
/// facing when there is horizontal input.
pub fn integrate(player: &mut Player, axis: (f32, f32), dt: f32, bounds: &ClampBounds) {
    let dir = direction(axis);
    let moving = dir != Vec2::ZERO;

    player.state = if moving { AnimState::Run } else { AnimState::Idle };

    if dir.x > 0.0 {
        player.facing = Facing::Right;
    } else if dir.x < 0.0 {
        player.facing = Facing::Left;
    }

    player.intent = dir;
    player.position = bounds.clamp(player.position + dir * player.speed * dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::PlayerSettings;

    fn player_at(x: f32, y: f32) -> Player {
        let mut p = Player::new(&PlayerSettings::default());
        p.position = Vec2::new(x, y);
        p
    }

    fn open_bounds() -> ClampBounds {
        ClampBounds::inset(10_000.0, 10_000.0, 20.0)
    }

    #[test]
    fn test_diagonal_speed_matches_single_axis() {
        let dt = 0.016;
        let bounds = open_bounds();

        let mut straight = player_at(500.0, 500.0);
        integrate(&mut straight, (1.0, 0.0), dt, &bounds);
        let straight_dist = (straight.position - Vec2::new(500.0, 500.0)).length();

        let mut diagonal = player_at(500.0, 500.0);
        integrate(&mut diagonal, (1.0, 1.0), dt, &bounds);
        let diagonal_dist = (diagonal.position - Vec2::new(500.0, 500.0)).length();

        let expected = diagonal.speed * dt;
        assert!((straight_dist - expected).abs() < 1e-3);
        assert!((diagonal_dist - expected).abs() < 1e-3, "diagonal moved {}", diagonal_dist);
    }

    #[test]
    fn test_state_and_facing() {
        let bounds = open_bounds();
        let mut p = player_at(500.0, 500.0);

        integrate(&mut p, (-1.0, 0.0), 0.016, &bounds);
        assert_eq!(p.state, AnimState::Run);
        assert_eq!(p.facing, Facing::Left);

        // Vertical only keeps the last facing
        integrate(&mut p, (0.0, 1.0), 0.016, &bounds);
        assert_eq!(p.state, AnimState::Run);
        assert_eq!(p.facing, Facing::Left);

        integrate(&mut p, (0.0, 0.0), 0.016, &bounds);
        assert_eq!(p.state, AnimState::Idle);
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(p.intent, Vec2::ZERO);

        integrate(&mut p, (1.0, -1.0), 0.016, &bounds);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_position_stays_in_bounds() {
        let bounds = ClampBounds::inset(300.0, 200.0, 20.0);
        let mut p = player_at(150.0, 100.0);
        let axes = [
            (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (-1.0, 1.0),
            (-1.0, 0.0), (-1.0, -1.0), (0.0, -1.0), (1.0, -1.0),
        ];

        // Deterministic pseudo-random walk with long runs into every wall
        let mut seed: u32 = 0x1234_5678;
        for step in 0..5_000 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let axis = axes[(seed >> 29) as usize];
            let dt = if step % 97 == 0 { 0.033 } else { 0.016 };
            integrate(&mut p, axis, dt, &bounds);
            assert!(bounds.contains(p.position), "escaped to {:?} at step {}", p.position, step);
        }
    }

    #[test]
    fn test_clamp_at_edges() {
        let bounds = ClampBounds::inset(300.0, 200.0, 20.0);
        let mut p = player_at(25.0, 25.0);
        integrate(&mut p, (-1.0, -1.0), 1.0, &bounds);
        assert_eq!(p.position, Vec2::new(20.0, 20.0));

        integrate(&mut p, (1.0, 1.0), 10.0, &bounds);
        assert_eq!(p.position, Vec2::new(280.0, 180.0));
    }

    #[test]
    fn test_tiny_world_collapses_to_center() {
        let bounds = ClampBounds::inset(30.0, 100.0, 20.0);
        assert_eq!(bounds.min_x, 15.0);
        assert_eq!(bounds.max_x, 15.0);
        assert_eq!(bounds.min_y, 20.0);
        assert_eq!(bounds.max_y, 80.0);
    }
}
