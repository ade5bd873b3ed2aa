//! Shared types for the handrig simulator.
//!
//! # Invariants
//! - Types here are plain data: no device access, no collaborator calls.
//! - All geometry uses glam; angles are radians unless a name says degrees.

pub mod types;
pub mod view;

pub use types::{HandSide, Pose, RigId, TargetId};
pub use view::{Ray, ViewCamera};

pub fn crate_info() -> &'static str {
    "handrig-common v0.1.0"
}
