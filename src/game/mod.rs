//! Portfolio core
//!
//! Everything that happens in a frame, with no drawing:
//! - Motion: input axis to position, diagonal-normalized and clamped
//! - Collision: AABB proximity between the player and project stations
//! - Animation: fixed-timestep sprite-sheet clock
//! - Camera: world-to-screen offset
//! - Runtime: the Walking / ModalOpen state machine tying it together
//!
//! Drawing goes through the `Presenter` trait.

pub mod animation;
pub mod camera;
pub mod collision;
pub mod event;
pub mod motion;
pub mod player;
pub mod presenter;
pub mod runtime;
pub mod station;
pub mod world;

// Re-export main types
pub use animation::{AnimationClip, ClipSet};
pub use camera::CameraPolicy;
pub use collision::Aabb;
pub use event::UiEvent;
pub use player::Facing;
pub use presenter::{Presenter, RenderFrame};
pub use runtime::Simulation;
pub use station::{Link, Media, Station, StationDetail, StationId};
