//! Basic UI widgets

use macroquad::prelude::*;
use super::{theme::*, MouseState, Rect};

/// Approximate glyph width as a fraction of the font size.
/// measure_text needs a live font context, so layout math uses this.
const CHAR_WIDTH_RATIO: f32 = 0.5;

/// Approximate pixel width of a string
pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO
}

/// Wrap text to fit within a given pixel width
/// Returns a vector of lines that fit within max_width
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    // First split by explicit newlines to preserve paragraph breaks
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();

        for word in words {
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            if approx_text_width(&test_line, font_size) <= max_width || current_line.is_empty() {
                current_line = test_line;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Draw wrapped text starting at (x, y) as the first baseline.
/// Returns the y of the next free line.
pub fn draw_wrapped(text: &str, x: f32, y: f32, max_width: f32, font_size: f32, color: Color) -> f32 {
    let line_height = (font_size * 1.3).round();
    let mut cursor = y;
    for line in wrap_text(text, font_size, max_width) {
        draw_text(&line, x.round(), cursor.round(), font_size, color);
        cursor += line_height;
    }
    cursor
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(rect: Rect, r: f32, color: Color) {
    let r = r.min(rect.w * 0.5).min(rect.h * 0.5);
    let Rect { x, y, w, h } = rect;
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Text button with hover highlight, returns true if clicked
pub fn text_button(mouse: &MouseState, rect: Rect, label: &str, font_size: f32) -> bool {
    let hovered = mouse.inside(&rect);
    let bg = if hovered { BUTTON_HOVER } else { BUTTON_BG };
    draw_rounded_rect(rect, 6.0, bg);

    let text_w = approx_text_width(label, font_size);
    let text_x = rect.center_x() - text_w * 0.5;
    let text_y = rect.y + (rect.h + font_size * 0.6) * 0.5;
    draw_text(label, text_x.round(), text_y.round(), font_size, TEXT_COLOR);

    mouse.clicked(&rect)
}

/// Lay out pill-shaped items left to right, wrapping at `max_width`.
/// Returns the rect of each item (same order as `labels`).
pub fn flow_layout(labels: &[&str], origin_x: f32, origin_y: f32, max_width: f32, font_size: f32, item_h: f32) -> Vec<Rect> {
    let gap = 8.0;
    let pad = 12.0;
    let mut x = origin_x;
    let mut y = origin_y;
    let mut rects = Vec::with_capacity(labels.len());

    for label in labels {
        let w = approx_text_width(label, font_size) + pad * 2.0;
        if x > origin_x && x + w > origin_x + max_width {
            x = origin_x;
            y += item_h + gap;
        }
        rects.push(Rect::new(x, y, w, item_h));
        x += w + gap;
    }
    rects
}
