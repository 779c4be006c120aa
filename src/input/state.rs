//! Input state management
//!
//! The keyboard is sampled once per frame into an `ActionSet`. Edge-triggered
//! presses come from diffing that set against the previous frame's set, so a
//! press is visible for exactly one frame no matter how long the key stays
//! down (OS key repeat included).

use macroquad::prelude::{is_key_down, is_key_pressed};
use super::Action;

/// Set of actions whose keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    #[cfg(test)]
    pub fn from_actions(actions: &[Action]) -> Self {
        let mut set = Self::EMPTY;
        for &action in actions {
            set.insert(action);
        }
        set
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn union(self, other: ActionSet) -> ActionSet {
        ActionSet(self.0 | other.0)
    }

    /// Actions held in `self` but not in `previous`
    pub fn newly_held(&self, previous: ActionSet) -> ActionSet {
        ActionSet(self.0 & !previous.0)
    }
}

/// One frame of keyboard state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardSample {
    /// Keys down at sampling time
    pub held: ActionSet,
    /// Keys that went down since the last frame, even if already released
    pub tapped: ActionSet,
}

/// Read macroquad's key state for every bound key.
/// This is the only place the keyboard is touched.
pub fn sample_keyboard() -> KeyboardSample {
    let mut sample = KeyboardSample::default();
    for action in Action::ALL {
        if action.keys().iter().any(|&key| is_key_down(key)) {
            sample.held.insert(action);
        }
        if action.keys().iter().any(|&key| is_key_pressed(key)) {
            sample.tapped.insert(action);
        }
    }
    sample
}

/// Per-frame input: held actions plus actions pressed this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: ActionSet,
    previous: ActionSet,
    pressed: ActionSet,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame with the freshly sampled keyboard.
    /// Recomputes the edge flags, which clears last frame's presses.
    /// A tap that went down and up between two frames still counts as a press.
    pub fn apply(&mut self, sample: KeyboardSample) {
        self.previous = self.held;
        self.held = sample.held;
        self.pressed = sample.held.newly_held(self.previous).union(sample.tapped);
    }

    /// Held-only update (no sub-frame taps)
    #[cfg(test)]
    pub fn update(&mut self, held: ActionSet) {
        self.apply(KeyboardSample { held, tapped: ActionSet::EMPTY });
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.held.contains(action)
    }

    /// Check if action went from up to down this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    /// Raw movement axis in screen space (y grows downward).
    /// Each component is -1, 0 or 1; opposite keys cancel out.
    pub fn movement_axis(&self) -> (f32, f32) {
        let mut mx = 0.0;
        let mut my = 0.0;
        if self.action_down(Action::MoveLeft) { mx -= 1.0; }
        if self.action_down(Action::MoveRight) { mx += 1.0; }
        if self.action_down(Action::MoveUp) { my -= 1.0; }
        if self.action_down(Action::MoveDown) { my += 1.0; }
        (mx, my)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(actions: &[Action]) -> ActionSet {
        ActionSet::from_actions(actions)
    }

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();

        input.update(held(&[Action::Interact]));
        assert!(input.action_pressed(Action::Interact));

        // Still held: no new press
        for _ in 0..10 {
            input.update(held(&[Action::Interact]));
            assert!(input.action_down(Action::Interact));
            assert!(!input.action_pressed(Action::Interact));
        }

        input.update(ActionSet::EMPTY);
        assert!(!input.action_down(Action::Interact));
        assert!(!input.action_pressed(Action::Interact));

        input.update(held(&[Action::Interact]));
        assert!(input.action_pressed(Action::Interact));
    }

    #[test]
    fn test_press_count_matches_physical_presses() {
        let mut input = InputState::new();
        // Three presses of varying length separated by releases
        let frames: Vec<bool> = [vec![true; 4], vec![false; 2], vec![true; 1], vec![false; 1], vec![true; 30]]
            .concat();

        let presses = frames
            .iter()
            .filter(|&&down| {
                input.update(if down { held(&[Action::Interact]) } else { ActionSet::EMPTY });
                input.action_pressed(Action::Interact)
            })
            .count();
        assert_eq!(presses, 3);
    }

    #[test]
    fn test_sub_frame_tap_counts_once() {
        let mut input = InputState::new();
        let tap = KeyboardSample { held: ActionSet::EMPTY, tapped: held(&[Action::Interact]) };

        // Down and up again before the frame sampled it
        input.apply(tap);
        assert!(input.action_pressed(Action::Interact));
        assert!(!input.action_down(Action::Interact));

        input.apply(KeyboardSample::default());
        assert!(!input.action_pressed(Action::Interact));
    }

    #[test]
    fn test_tap_and_hold_is_one_press() {
        let mut input = InputState::new();
        let interact = held(&[Action::Interact]);

        // Key goes down this frame: both sources report it, still one press
        input.apply(KeyboardSample { held: interact, tapped: interact });
        assert!(input.action_pressed(Action::Interact));

        input.apply(KeyboardSample { held: interact, tapped: ActionSet::EMPTY });
        assert!(!input.action_pressed(Action::Interact));
    }

    #[test]
    fn test_movement_axis() {
        let mut input = InputState::new();
        input.update(held(&[Action::MoveUp, Action::MoveRight]));
        assert_eq!(input.movement_axis(), (1.0, -1.0));

        input.update(held(&[Action::MoveLeft, Action::MoveRight]));
        assert_eq!(input.movement_axis(), (0.0, 0.0));

        input.update(ActionSet::EMPTY);
        assert_eq!(input.movement_axis(), (0.0, 0.0));
    }
}
