//! Dino Folio: a walkable portfolio
//!
//! A small dino walks around a room of project stations. Stand next to
//! one and press E to read about the project.
//! - WASD / arrow keys to walk
//! - E to open the project you stand at
//! - Escape (or a click outside) to close overlays

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod links;
mod presenter;
mod project;
mod ui;

use macroquad::prelude::*;
use macroquad::logging::{error, info};
use game::{Simulation, UiEvent};
use input::{sample_keyboard, InputState};
use presenter::MacroquadPresenter;
use project::PortfolioData;

/// Portfolio file, relative to the working directory (native) or site root (web)
const PORTFOLIO_PATH: &str = "assets/portfolio.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: "Portfolio".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Read the portfolio file, falling back to the built-in projects when absent.
/// A file that exists but fails to parse or validate is fatal.
#[cfg(not(target_arch = "wasm32"))]
async fn load_portfolio() -> PortfolioData {
    if !std::path::Path::new(PORTFOLIO_PATH).exists() {
        info!("{} not found, using built-in portfolio", PORTFOLIO_PATH);
        return PortfolioData::default();
    }
    match project::load_from_path(PORTFOLIO_PATH) {
        Ok(data) => {
            info!("Loaded {} stations from {}", data.stations.len(), PORTFOLIO_PATH);
            data
        }
        Err(e) => {
            error!("Invalid portfolio {}: {}", PORTFOLIO_PATH, e);
            panic!("invalid portfolio {}: {}", PORTFOLIO_PATH, e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_portfolio() -> PortfolioData {
    let bytes = match macroquad::file::load_file(PORTFOLIO_PATH).await {
        Ok(bytes) => bytes,
        Err(e) => {
            info!("{} not available ({}), using built-in portfolio", PORTFOLIO_PATH, e);
            return PortfolioData::default();
        }
    };
    match project::load_from_bytes(&bytes) {
        Ok(data) => {
            info!("Loaded {} stations from {}", data.stations.len(), PORTFOLIO_PATH);
            data
        }
        Err(e) => {
            error!("Invalid portfolio {}: {}", PORTFOLIO_PATH, e);
            panic!("invalid portfolio {}: {}", PORTFOLIO_PATH, e);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let data = load_portfolio().await;
    let mut presenter = MacroquadPresenter::load(&data).await;
    let mut sim = Simulation::new(&data);
    let mut input = InputState::new();

    info!("=== Dino Folio v{} ===", VERSION);

    loop {
        input.apply(sample_keyboard());

        let (w, h) = (screen_width(), screen_height());
        if sim.world.viewport != vec2(w, h) {
            sim.resize(w, h);
        }

        sim.tick(&input, get_frame_time());
        sim.present(&mut presenter);

        for event in presenter.poll_ui() {
            match event {
                UiEvent::OpenLink(url) => links::open_external(&url),
                other => sim.handle_ui(other),
            }
        }

        next_frame().await
    }
}
