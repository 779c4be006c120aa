//! World layer: floor grid, stations and the player sprite

use macroquad::prelude::*;
use crate::game::{ClipSet, Facing, RenderFrame};
use crate::ui::{draw_rounded_rect, wrap_text, Rect};
use crate::ui::theme::*;
use super::TextureCache;

/// On-screen size multiplier for sprite frames
pub const SPRITE_SCALE: f32 = 2.0;

pub fn draw_floor(frame: &RenderFrame) {
    let off = frame.camera_offset;
    let (w, h) = (screen_width(), screen_height());

    // First grid line at or before the screen edge
    let mut x = -(off.x.rem_euclid(GRID_SPACING));
    while x < w {
        draw_line(x.round(), 0.0, x.round(), h, 1.0, GRID_COLOR);
        x += GRID_SPACING;
    }
    let mut y = -(off.y.rem_euclid(GRID_SPACING));
    while y < h {
        draw_line(0.0, y.round(), w, y.round(), 1.0, GRID_COLOR);
        y += GRID_SPACING;
    }

    // World edge (only visible when the world is larger than the screen)
    draw_rectangle_lines(-off.x, -off.y, frame.world_size.x, frame.world_size.y, 2.0, STATION_BORDER);
}

pub fn draw_stations(frame: &RenderFrame) {
    let off = frame.camera_offset;

    for station in frame.stations {
        let b = station.bounds;
        let rect = Rect::new(b.x - off.x, b.y - off.y, b.w, b.h);
        let active = frame.active_station == Some(&station.id);

        draw_rounded_rect(rect, 8.0, STATION_BG);
        let (border, thickness) = if active { (STATION_ACTIVE, 2.0) } else { (STATION_BORDER, 1.0) };
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, border);

        let inner = rect.pad(10.0);
        let mut y = inner.y + FONT_SIZE_HEADER;
        for line in wrap_text(&station.detail.title, FONT_SIZE_HEADER, inner.w) {
            draw_text(&line, inner.x.round(), y.round(), FONT_SIZE_HEADER, TEXT_COLOR);
            y += FONT_SIZE_HEADER;
        }
        if !station.detail.subtitle.is_empty() {
            for line in wrap_text(&station.detail.subtitle, FONT_SIZE_SMALL, inner.w) {
                draw_text(&line, inner.x.round(), (y + 2.0).round(), FONT_SIZE_SMALL, TEXT_MUTED);
                y += FONT_SIZE_SMALL + 2.0;
            }
        }

        if active {
            draw_text("Press E", inner.x.round(), inner.bottom().round(), FONT_SIZE_SMALL, STATION_ACTIVE);
        }
    }
}

pub fn draw_player(frame: &RenderFrame, clips: &ClipSet, textures: &TextureCache) {
    let player = frame.player;
    let screen = player.position - frame.camera_offset;
    let clip = clips.clip(player.state);

    let Some(texture) = textures.get(&clip.sheet) else {
        let b = player.collision_box();
        draw_rectangle(b.x - frame.camera_offset.x, b.y - frame.camera_offset.y, b.w, b.h, PLAYER_FALLBACK);
        return;
    };

    let fw = clip.frame_width as f32;
    let fh = clip.frame_height as f32;
    let index = frame.animation_frame % clip.frames.max(1);
    let dest = vec2(fw * SPRITE_SCALE, fh * SPRITE_SCALE);

    draw_texture_ex(
        texture,
        (screen.x - dest.x * 0.5).round(),
        (screen.y - dest.y * 0.5).round(),
        WHITE,
        DrawTextureParams {
            dest_size: Some(dest),
            source: Some(macroquad::math::Rect::new(index as f32 * fw, 0.0, fw, fh)),
            flip_x: player.facing == Facing::Left,
            ..Default::default()
        },
    );
}
