//! Sprite-sheet animation
//!
//! Clips are horizontal strips of equally sized frames. The clock advances
//! on a fixed timestep: time accumulates until it covers a whole frame
//! duration, possibly several times in one tick when a frame lagged.

use serde::{Serialize, Deserialize};
use super::player::AnimState;

/// Absorbs float drift when accumulated time lands exactly on a frame boundary.
/// Relative to the frame duration so it can never cover a whole frame.
const FRAME_EPSILON: f64 = 1e-6;

/// One animation strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Sheet path, relative to the working directory (native) or site root (web)
    pub sheet: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: u32,
    pub fps: f32,
}

impl AnimationClip {
    /// Seconds per frame
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.fps as f64
    }
}

/// The clip for every animation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipSet {
    pub idle: AnimationClip,
    pub run: AnimationClip,
}

impl ClipSet {
    pub fn clip(&self, state: AnimState) -> &AnimationClip {
        match state {
            AnimState::Idle => &self.idle,
            AnimState::Run => &self.run,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimState, &AnimationClip)> {
        [(AnimState::Idle, &self.idle), (AnimState::Run, &self.run)].into_iter()
    }
}

impl Default for ClipSet {
    fn default() -> Self {
        Self {
            idle: AnimationClip {
                sheet: "assets/sprites/dino_idle.png".to_string(),
                frame_width: 32,
                frame_height: 32,
                frames: 16,
                fps: 12.0,
            },
            run: AnimationClip {
                sheet: "assets/sprites/dino_run.png".to_string(),
                frame_width: 32,
                frame_height: 32,
                frames: 8,
                fps: 14.0,
            },
        }
    }
}

/// Playback position for the player's current clip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    state: AnimState,
    frame: u32,
    accumulator: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> AnimState {
        self.state
    }

    /// Always in `[0, frames)` of the current clip
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Advance by `dt` seconds.
    ///
    /// A state change restarts playback at frame 0 before the time is
    /// applied. Several frames may advance at once after a long frame.
    pub fn tick(&mut self, state: AnimState, clip: &AnimationClip, dt: f32) {
        if state != self.state {
            self.state = state;
            self.frame = 0;
            self.accumulator = 0.0;
        }

        let frame_duration = clip.frame_duration();
        // Validated configs never get here; stay on frame 0 rather than divide by zero
        if clip.frames == 0 || !(frame_duration.is_finite() && frame_duration > 0.0) {
            return;
        }

        self.accumulator += dt as f64;
        let steps = ((self.accumulator + frame_duration * FRAME_EPSILON) / frame_duration).floor();
        if steps >= 1.0 {
            self.accumulator = (self.accumulator - steps * frame_duration).max(0.0);
            self.frame = ((self.frame as u64 + steps as u64 % clip.frames as u64) % clip.frames as u64) as u32;
        }
    }
}
