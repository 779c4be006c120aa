//! Mouse state for overlay interaction

use macroquad::prelude::{is_mouse_button_pressed, mouse_position, MouseButton};
use super::Rect;

/// Mouse state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    pub fn sample() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_requires_press() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let hover = MouseState { x: 5.0, y: 5.0, left_pressed: false };
        assert!(hover.inside(&r));
        assert!(!hover.clicked(&r));

        let click = MouseState { left_pressed: true, ..hover };
        assert!(click.clicked(&r));

        let outside = MouseState { x: 50.0, ..click };
        assert!(!outside.clicked(&r));
    }
}
