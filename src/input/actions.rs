//! Portfolio action definitions
//!
//! Four movement directions, one interact key and one cancel key.
//! Nothing else reaches the simulation from the keyboard.

use macroquad::prelude::KeyCode;

/// All actions the keyboard can trigger
///
/// Key mappings:
/// - W / Up arrow = MoveUp
/// - S / Down arrow = MoveDown
/// - A / Left arrow = MoveLeft
/// - D / Right arrow = MoveRight
/// - E = Interact (open the nearby project)
/// - Escape = Cancel (close modal / about panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Interact,
    Cancel,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Interact,
        Action::Cancel,
    ];

    /// Bit used for this action inside an `ActionSet`
    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Keyboard keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveUp => &[KeyCode::W, KeyCode::Up],
            Action::MoveDown => &[KeyCode::S, KeyCode::Down],
            Action::MoveLeft => &[KeyCode::A, KeyCode::Left],
            Action::MoveRight => &[KeyCode::D, KeyCode::Right],
            Action::Interact => &[KeyCode::E],
            Action::Cancel => &[KeyCode::Escape],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0u8;
        for action in Action::ALL {
            assert_eq!(seen & action.bit(), 0, "{:?} shares a bit", action);
            seen |= action.bit();
        }
    }

    #[test]
    fn test_every_action_has_a_key() {
        for action in Action::ALL {
            assert!(!action.keys().is_empty());
        }
    }
}
