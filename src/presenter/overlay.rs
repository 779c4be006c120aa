//! Modal overlays: project detail and about panel
//!
//! Both are drawn over a dimmed backdrop. A click outside the card closes
//! the overlay, same as its close button.

use macroquad::prelude::*;
use crate::game::{Link, Media, Station, UiEvent};
use crate::project::AboutInfo;
use crate::ui::{approx_text_width, draw_rounded_rect, draw_wrapped, flow_layout, text_button, MouseState, Rect};
use crate::ui::theme::*;
use super::TextureCache;

const PAD: f32 = 24.0;
const BUTTON_H: f32 = 34.0;
const MEDIA_H: f32 = 200.0;

/// Backdrop and card, sized to the screen
fn draw_card(max_w: f32, max_h: f32) -> Rect {
    let screen = Rect::screen(screen_width(), screen_height());
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, BACKDROP);

    let card = screen.pad(20.0).centered(max_w, max_h);
    draw_rounded_rect(card, 10.0, CARD_BG);
    draw_rectangle_lines(card.x, card.y, card.w, card.h, 1.0, CARD_BORDER);
    card
}

/// Close button in the card's top-right corner
fn close_button(card: Rect, mouse: &MouseState) -> bool {
    let w = 72.0;
    let rect = Rect::new(card.right() - w - 12.0, card.y + 12.0, w, 30.0);
    text_button(mouse, rect, "Close", FONT_SIZE_SMALL)
}

/// Row of link buttons along the bottom of `area`, one event per click
fn link_row(links: &[Link], area: Rect, mouse: &MouseState, events: &mut Vec<UiEvent>) {
    let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
    let row = area.slice_bottom(BUTTON_H);
    for (link, rect) in links.iter().zip(flow_layout(&labels, row.x, row.y, row.w, FONT_SIZE_CONTENT, BUTTON_H)) {
        if text_button(mouse, rect, &link.label, FONT_SIZE_CONTENT) {
            events.push(UiEvent::OpenLink(link.href.clone()));
        }
    }
}

fn draw_media(media: &Media, area: Rect, textures: &TextureCache, mouse: &MouseState, events: &mut Vec<UiEvent>) {
    draw_rectangle(area.x, area.y, area.w, area.h, MEDIA_BG);

    match media {
        Media::Image { src } => match textures.get(src) {
            Some(tex) => {
                // Fit inside the area, keeping aspect
                let scale = (area.w / tex.width()).min(area.h / tex.height());
                let size = vec2(tex.width() * scale, tex.height() * scale);
                let dest = area.centered(size.x, size.y);
                draw_texture_ex(tex, dest.x, dest.y, WHITE, DrawTextureParams {
                    dest_size: Some(size),
                    ..Default::default()
                });
            }
            None => {
                let label = "Image unavailable";
                let x = area.center_x() - approx_text_width(label, FONT_SIZE_SMALL) * 0.5;
                draw_text(label, x.round(), (area.y + area.h * 0.5).round(), FONT_SIZE_SMALL, TEXT_MUTED);
            }
        },
        Media::Video { .. } => {
            if let Some(url) = media.external_url() {
                if text_button(mouse, area.centered(160.0, BUTTON_H), "Watch video", FONT_SIZE_CONTENT) {
                    events.push(UiEvent::OpenLink(url));
                }
            }
        }
    }
}

/// Draw the detail modal for a station. Returns the clicks it produced.
pub fn draw_detail(station: &Station, textures: &TextureCache, mouse: &MouseState) -> Vec<UiEvent> {
    let mut events = Vec::new();
    let detail = &station.detail;
    let card = draw_card(760.0, 640.0);

    if close_button(card, mouse) || (mouse.left_pressed && !mouse.inside(&card)) {
        events.push(UiEvent::CloseDetail);
    }

    let body = card.pad(PAD);
    let text_w = body.w - 90.0;
    let mut y = body.y + FONT_SIZE_TITLE * 0.8;
    y = draw_wrapped(&detail.title, body.x, y, text_w, FONT_SIZE_TITLE, TEXT_COLOR);
    if !detail.subtitle.is_empty() {
        y = draw_wrapped(&detail.subtitle, body.x, y, text_w, FONT_SIZE_CONTENT, TEXT_MUTED);
    }
    y += 8.0;

    if let Some(media) = &detail.media {
        let area = Rect::new(body.x, y, body.w, MEDIA_H.min(body.h * 0.35));
        draw_media(media, area, textures, mouse, &mut events);
        y = area.bottom() + 16.0 + FONT_SIZE_CONTENT;
    } else {
        y += FONT_SIZE_CONTENT;
    }

    if !detail.description.is_empty() {
        y = draw_wrapped(&detail.description, body.x, y, body.w, FONT_SIZE_CONTENT, TEXT_COLOR);
        y += 6.0;
    }

    for bullet in &detail.bullets {
        draw_circle(body.x + 4.0, (y - FONT_SIZE_CONTENT * 0.3).round(), 2.5, ACCENT_COLOR);
        y = draw_wrapped(bullet, body.x + 16.0, y, body.w - 16.0, FONT_SIZE_CONTENT, TEXT_COLOR);
    }

    if !detail.tech.is_empty() {
        y += 4.0;
        let labels: Vec<&str> = detail.tech.iter().map(|t| t.as_str()).collect();
        let tag_h = FONT_SIZE_SMALL + 10.0;
        for (label, rect) in labels.iter().zip(flow_layout(&labels, body.x, y, body.w, FONT_SIZE_SMALL, tag_h)) {
            draw_rounded_rect(rect, tag_h * 0.5, BUTTON_BG);
            let tx = rect.center_x() - approx_text_width(label, FONT_SIZE_SMALL) * 0.5;
            draw_text(label, tx.round(), (rect.y + tag_h * 0.7).round(), FONT_SIZE_SMALL, ACCENT_COLOR);
        }
    }

    link_row(&detail.links, body, mouse, &mut events);
    events
}

/// Draw the about panel. Returns the clicks it produced.
pub fn draw_about(about: &AboutInfo, mouse: &MouseState) -> Vec<UiEvent> {
    let mut events = Vec::new();
    let card = draw_card(560.0, 460.0);

    if close_button(card, mouse) || (mouse.left_pressed && !mouse.inside(&card)) {
        events.push(UiEvent::CloseAbout);
    }

    let body = card.pad(PAD);
    let mut y = body.y + FONT_SIZE_TITLE * 0.8;
    y = draw_wrapped(&about.name, body.x, y, body.w - 90.0, FONT_SIZE_TITLE, TEXT_COLOR);
    if !about.tagline.is_empty() {
        y = draw_wrapped(&about.tagline, body.x, y, body.w, FONT_SIZE_CONTENT, ACCENT_COLOR);
    }
    y += 10.0;

    for paragraph in &about.paragraphs {
        y = draw_wrapped(paragraph, body.x, y, body.w, FONT_SIZE_CONTENT, TEXT_COLOR);
        y += 8.0;
    }

    link_row(&about.links, body, mouse, &mut events);
    events
}
