//! Macroquad presenter
//!
//! Draws what the simulation hands over each frame and collects the
//! clicks made on the overlays. Nothing here mutates game state directly:
//! clicks come back out of `poll_ui` as `UiEvent`s for the shell to route.

mod hud;
mod overlay;
mod scene;

use std::collections::HashMap;
use macroquad::prelude::*;
use macroquad::logging::{info, warn};
use crate::game::{ClipSet, Media, Presenter, RenderFrame, StationId, UiEvent};
use crate::project::{AboutInfo, PortfolioData};
use crate::ui::MouseState;

/// Textures keyed by their asset path
pub(crate) type TextureCache = HashMap<String, Texture2D>;

pub struct MacroquadPresenter {
    clips: ClipSet,
    about: AboutInfo,
    textures: TextureCache,
    /// Station whose detail modal is showing
    detail: Option<StationId>,
    about_open: bool,
    /// Events produced by clicks during the last render
    ui_events: Vec<UiEvent>,
}

impl MacroquadPresenter {
    /// Load every sprite sheet and screenshot up front.
    /// Missing files are logged and drawn as placeholders.
    pub async fn load(data: &PortfolioData) -> Self {
        let mut textures = TextureCache::new();

        for (state, clip) in data.sprites.iter() {
            if textures.contains_key(&clip.sheet) {
                continue;
            }
            match load_texture(&clip.sheet).await {
                Ok(tex) => {
                    // Pixel art: keep it crisp at 2x
                    tex.set_filter(FilterMode::Nearest);
                    info!("Loaded {:?} sheet {}", state, clip.sheet);
                    textures.insert(clip.sheet.clone(), tex);
                }
                Err(e) => warn!("Failed to load sprite sheet {}: {}", clip.sheet, e),
            }
        }

        for station in &data.stations {
            if let Some(Media::Image { src }) = &station.detail.media {
                if textures.contains_key(src) {
                    continue;
                }
                match load_texture(src).await {
                    Ok(tex) => {
                        tex.set_filter(FilterMode::Linear);
                        textures.insert(src.clone(), tex);
                    }
                    Err(e) => warn!("Failed to load media for '{}': {}", station.id, e),
                }
            }
        }

        Self {
            clips: data.sprites.clone(),
            about: data.about.clone(),
            textures,
            detail: None,
            about_open: false,
            ui_events: Vec::new(),
        }
    }

    /// UI events gathered while drawing the last frame
    pub fn poll_ui(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.ui_events)
    }
}

impl Presenter for MacroquadPresenter {
    fn render(&mut self, frame: &RenderFrame) {
        let mouse = MouseState::sample();
        // Only the topmost overlay reacts to the mouse
        let inert = MouseState { x: -1.0, y: -1.0, left_pressed: false };

        clear_background(crate::ui::theme::BG_COLOR);
        scene::draw_floor(frame);
        scene::draw_stations(frame);
        scene::draw_player(frame, &self.clips, &self.textures);

        let overlay_up = self.detail.is_some() || self.about_open;
        hud::draw_hint(frame);
        if hud::draw_about_button(if overlay_up { &inert } else { &mouse }) {
            self.ui_events.push(UiEvent::OpenAbout);
        }
        hud::draw_version();

        if self.about_open {
            let about_mouse = if self.detail.is_some() { &inert } else { &mouse };
            self.ui_events.extend(overlay::draw_about(&self.about, about_mouse));
        }

        if let Some(id) = &self.detail {
            match frame.stations.iter().find(|s| &s.id == id) {
                Some(station) => {
                    self.ui_events.extend(overlay::draw_detail(station, &self.textures, &mouse));
                }
                None => {
                    warn!("Detail requested for unknown station '{}'", id);
                    self.ui_events.push(UiEvent::CloseDetail);
                }
            }
        }
    }

    fn show_detail(&mut self, id: &StationId) {
        self.detail = Some(id.clone());
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }

    fn show_about(&mut self) {
        self.about_open = true;
    }

    fn hide_about(&mut self) {
        self.about_open = false;
    }
}
