//! World layout
//!
//! Owns the station list and the world size. With the fixed camera the
//! world is resized to the viewport on every window resize, and stations
//! are pulled back inside so none of them ends up off-screen.

use macroquad::prelude::Vec2;
use crate::project::CameraSettings;
use super::camera::CameraPolicy;
use super::motion::ClampBounds;
use super::station::Station;

pub struct World {
    pub policy: CameraPolicy,
    /// World size in pixels
    pub size: Vec2,
    /// Last known viewport size in pixels
    pub viewport: Vec2,
    pub stations: Vec<Station>,
    station_pad: f32,
    player_margin: f32,
}

impl World {
    pub fn new(settings: &CameraSettings, stations: Vec<Station>) -> Self {
        let size = match settings.policy {
            // Replaced on the first fit; keep something sane until then
            CameraPolicy::Fixed => Vec2::ZERO,
            CameraPolicy::Follow => Vec2::new(settings.world_size[0], settings.world_size[1]),
        };
        Self {
            policy: settings.policy,
            size,
            viewport: Vec2::ZERO,
            stations,
            station_pad: settings.station_pad,
            player_margin: settings.player_margin,
        }
    }

    /// Where the player's center may go
    pub fn player_bounds(&self) -> ClampBounds {
        ClampBounds::inset(self.size.x, self.size.y, self.player_margin)
    }

    /// Adopt a new viewport size.
    ///
    /// Fixed camera: the world becomes the viewport and every station is
    /// clamped to stay fully visible (with padding). Follow camera: the world
    /// keeps its configured size; only the viewport is recorded.
    pub fn fit_to_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        if self.policy != CameraPolicy::Fixed {
            return;
        }

        self.size = self.viewport;
        let pad = self.station_pad;
        for station in &mut self.stations {
            let b = &mut station.bounds;
            let max_x = pad.max(self.size.x - b.w - pad);
            let max_y = pad.max(self.size.y - b.h - pad);
            b.x = b.x.clamp(pad, max_x);
            b.y = b.y.clamp(pad, max_y);
        }
    }
}
