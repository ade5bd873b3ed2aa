//! Handrig kernel: the simulated controller rig and its per-tick state
//! machines. Hand selection, pose updates, pointer-mode gating, step
//! rotation, locomotion, and the raycast grab trigger all live here.
//!
//! # Invariants
//! - Single-threaded and tick-driven; every mutation happens inside
//!   [`Simulator::tick`] or a lifecycle call.
//! - Exactly one hand is selected at any time after activation.
//! - Edges are derived from snapshot pairs, never from retained locks.

pub mod config;
pub mod hands;
pub mod mode;
pub mod motion;
pub mod registry;
pub mod simulator;
pub mod targeting;

pub use config::{ConfigError, PointerInputMode, SimConfig};
pub use hands::{HandState, Hands};
pub use mode::ModeState;
pub use motion::RigTransform;
pub use registry::RigRegistry;
pub use simulator::Simulator;

pub fn crate_info() -> &'static str {
    "handrig-kernel v0.1.0"
}
