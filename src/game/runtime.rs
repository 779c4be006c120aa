//! Portfolio Runtime
//!
//! One owned simulation state, advanced once per frame:
//! input -> motion -> proximity -> interaction -> animation.
//!
//! Application modes:
//! - Walking: the player moves and can open the station they stand at
//! - ModalOpen: a project's detail modal is up; motion and interaction are
//!   suspended until the modal is closed (Escape, close button, backdrop)
//!
//! The animation clock keeps running in both modes, so an idle dino keeps
//! breathing behind the modal.

use macroquad::logging::info;
use crate::input::{Action, InputState};
use crate::project::PortfolioData;
use super::animation::{AnimationClock, ClipSet};
use super::camera::camera_offset;
use super::collision::find_active_station;
use super::event::{EventQueue, PresentEvent, UiEvent};
use super::motion;
use super::player::Player;
use super::presenter::{Presenter, RenderFrame};
use super::station::{Station, StationId};
use super::world::World;

/// Application-level state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Walking,
    ModalOpen(StationId),
}

pub struct Simulation {
    pub player: Player,
    pub world: World,
    clips: ClipSet,
    clock: AnimationClock,
    mode: Mode,
    about_open: bool,
    /// Index into `world.stations` of the station in range (walking only)
    active: Option<usize>,
    max_frame_dt: f32,
    events: EventQueue<PresentEvent>,
}

impl Simulation {
    pub fn new(data: &PortfolioData) -> Self {
        Self {
            player: Player::new(&data.player),
            world: World::new(&data.camera, data.stations.clone()),
            clips: data.sprites.clone(),
            clock: AnimationClock::new(),
            mode: Mode::Walking,
            about_open: false,
            active: None,
            max_frame_dt: data.max_frame_dt,
            events: EventQueue::new(),
        }
    }

    #[cfg(test)]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[cfg(test)]
    pub fn about_open(&self) -> bool {
        self.about_open
    }

    #[cfg(test)]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Station the player currently stands at
    pub fn active_station(&self) -> Option<&Station> {
        self.active.and_then(|i| self.world.stations.get(i))
    }

    /// Refit the world to a new viewport and pull the player back inside
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.fit_to_viewport(width, height);
        self.player.position = self.world.player_bounds().clamp(self.player.position);
    }

    /// Run one frame of simulation
    pub fn tick(&mut self, input: &InputState, dt: f32) {
        let dt = dt.clamp(0.0, self.max_frame_dt);

        if input.action_pressed(Action::Cancel) {
            self.close_detail();
            self.close_about();
        }

        match self.mode {
            Mode::Walking => {
                let bounds = self.world.player_bounds();
                motion::integrate(&mut self.player, input.movement_axis(), dt, &bounds);

                let player_box = self.player.collision_box();
                self.active = find_active_station(&player_box, &self.world.stations)
                    .and_then(|hit| self.world.stations.iter().position(|s| s.id == hit.id));

                if input.action_pressed(Action::Interact) {
                    if let Some(id) = self.active_station().map(|s| s.id.clone()) {
                        self.open_detail(id);
                    }
                }
            }
            Mode::ModalOpen(_) => {
                self.active = None;
            }
        }

        let state = self.player.state;
        self.clock.tick(state, self.clips.clip(state), dt);
    }

    /// React to a click on the overlays.
    /// Links are opened by the shell; they carry no state change.
    pub fn handle_ui(&mut self, event: UiEvent) {
        match event {
            UiEvent::CloseDetail => self.close_detail(),
            UiEvent::OpenAbout => self.open_about(),
            UiEvent::CloseAbout => self.close_about(),
            UiEvent::OpenLink(_) => {}
        }
    }

    /// Forward queued requests to the presenter, then draw the frame
    pub fn present<P: Presenter>(&mut self, presenter: &mut P) {
        if !self.events.is_empty() {
            for event in self.events.drain() {
                match event {
                    PresentEvent::ShowDetail(id) => presenter.show_detail(&id),
                    PresentEvent::HideDetail => presenter.hide_detail(),
                    PresentEvent::ShowAbout => presenter.show_about(),
                    PresentEvent::HideAbout => presenter.hide_about(),
                }
            }
        }

        let frame = RenderFrame {
            player: &self.player,
            camera_offset: camera_offset(
                self.world.policy,
                self.player.position,
                self.world.viewport,
                self.world.size,
            ),
            animation_frame: self.clock.frame(),
            stations: &self.world.stations,
            active_station: self.active_station().map(|s| &s.id),
            world_size: self.world.size,
        };
        presenter.render(&frame);
    }

    fn open_detail(&mut self, id: StationId) {
        info!("Opening project '{}'", id);
        self.mode = Mode::ModalOpen(id.clone());
        self.active = None;
        self.events.send(PresentEvent::ShowDetail(id));
    }

    fn close_detail(&mut self) {
        if let Mode::ModalOpen(id) = std::mem::take(&mut self.mode) {
            info!("Closing project '{}'", id);
            self.events.send(PresentEvent::HideDetail);
        }
    }

    fn open_about(&mut self) {
        if !self.about_open {
            self.about_open = true;
            self.events.send(PresentEvent::ShowAbout);
        }
    }

    fn close_about(&mut self) {
        if self.about_open {
            self.about_open = false;
            self.events.send(PresentEvent::HideAbout);
        }
    }
}
