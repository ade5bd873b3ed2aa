//! External collaborator interfaces for the handrig simulator.
//!
//! The simulator core never talks to a concrete device or interaction
//! stack; it talks to the capability traits here. Hosts implement them
//! over their real device layer, and the in-memory implementations in
//! [`memory`] back the CLI demo and the kernel's tests.
//!
//! # Invariants
//! - Collaborators are consumed, never owned, by the simulator core.
//! - Capability is queried (`supports_button_aliasing`), never inferred
//!   from concrete type identity.

pub mod interfaces;
pub mod memory;

pub use interfaces::{DeviceBridge, InteractionBridge, RayHit, SceneRaycaster};
pub use memory::{LoggingDeviceBridge, NullDeviceBridge, RecordingBridge, SceneTarget, StaticScene};

pub fn crate_info() -> &'static str {
    "handrig-bridge v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("bridge"));
    }
}
