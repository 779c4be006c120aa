//! Screen-space overlay that is always visible

use macroquad::prelude::*;
use crate::game::RenderFrame;
use crate::ui::{approx_text_width, text_button, MouseState, Rect};
use crate::ui::theme::*;
use crate::VERSION;

const MARGIN: f32 = 14.0;

/// Set by `cargo xtask build-web`; absent in plain cargo builds
const BUILD_TIME: Option<&str> = option_env!("DINO_FOLIO_BUILD_TIME");

/// Version label, with the build time when one was stamped in
pub fn version_label(version: &str, built: Option<&str>) -> String {
    match built.map(str::trim).filter(|b| !b.is_empty()) {
        Some(built) => format!("v{} | built {}", version, built),
        None => format!("v{}", version),
    }
}

/// Hint line for the station the player stands at (if any)
pub fn hint_text(active_title: Option<&str>) -> String {
    match active_title {
        Some(title) => format!("Near {}. Press E to open.", title),
        None => "Walk with WASD. Approach a project and press E to open.".to_string(),
    }
}

pub fn draw_hint(frame: &RenderFrame) {
    let title = frame
        .active_station
        .and_then(|id| frame.stations.iter().find(|s| &s.id == id))
        .map(|s| s.detail.title.as_str());
    let text = hint_text(title);

    let strip = Rect::screen(screen_width(), screen_height()).slice_bottom(FONT_SIZE_CONTENT + MARGIN * 2.0);
    draw_rectangle(strip.x, strip.y, strip.w, strip.h, BACKDROP);
    draw_text(
        &text,
        MARGIN,
        (strip.y + MARGIN + FONT_SIZE_CONTENT * 0.8).round(),
        FONT_SIZE_CONTENT,
        if title.is_some() { STATION_ACTIVE } else { TEXT_COLOR },
    );
}

/// Top-right About button, returns true if clicked
pub fn draw_about_button(mouse: &MouseState) -> bool {
    let w = 84.0;
    let rect = Rect::new(screen_width() - w - MARGIN, MARGIN, w, 32.0);
    text_button(mouse, rect, "About", FONT_SIZE_CONTENT)
}

pub fn draw_version() {
    let label = version_label(VERSION, BUILD_TIME);
    let x = screen_width() - approx_text_width(&label, FONT_SIZE_SMALL) - MARGIN;
    let y = screen_height() - MARGIN;
    draw_text(&label, x.round(), y.round(), FONT_SIZE_SMALL, TEXT_MUTED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_near_station() {
        assert_eq!(hint_text(Some("Blue Car")), "Near Blue Car. Press E to open.");
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label("0.1.4", None), "v0.1.4");
        assert_eq!(version_label("0.1.4", Some("")), "v0.1.4");
        assert_eq!(
            version_label("0.1.4", Some("2026-10-16 09:30 UTC")),
            "v0.1.4 | built 2026-10-16 09:30 UTC"
        );
    }

    #[test]
    fn test_hint_walking() {
        assert_eq!(hint_text(None), "Walk with WASD. Approach a project and press E to open.");
    }
}
