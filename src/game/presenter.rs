//! Presentation contract
//!
//! The simulation draws nothing itself. Once per frame it hands a
//! `RenderFrame` to whatever implements `Presenter`, and it forwards modal
//! and about-panel requests as plain calls.

use macroquad::prelude::Vec2;
use super::player::Player;
use super::station::{Station, StationId};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub player: &'a Player,
    /// Subtract from world coordinates to get screen coordinates
    pub camera_offset: Vec2,
    /// Frame index into the clip for `player.state`
    pub animation_frame: u32,
    pub stations: &'a [Station],
    /// Station the player is standing at (walking mode only)
    pub active_station: Option<&'a StationId>,
    pub world_size: Vec2,
}

pub trait Presenter {
    fn render(&mut self, frame: &RenderFrame);
    fn show_detail(&mut self, id: &StationId);
    fn hide_detail(&mut self);
    fn show_about(&mut self);
    fn hide_about(&mut self);
}
