//! Input model for the handrig simulator: physical keys, non-blocking
//! per-tick device snapshots, deterministic edge derivation, the
//! caller-owned binding surface, and the logical-button alias table.
//!
//! # Invariants
//! - Edges are derived by comparing this tick's snapshot to the previous
//!   one; nothing here retains cross-tick locks.
//! - Bindings and aliases are read-only inputs to the simulator core.

pub mod alias;
pub mod bindings;
pub mod keys;
pub mod snapshot;

pub use alias::{ButtonAliasTable, LogicalButton};
pub use bindings::KeyBindings;
pub use keys::Key;
pub use snapshot::{DeviceSnapshot, FrameInput};

pub fn crate_info() -> &'static str {
    "handrig-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
