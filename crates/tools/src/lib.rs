//! Developer tooling: read-only rig inspection and session reporting.
//!
//! # Invariants
//! - Tools never mutate simulator state.

pub mod inspector;

pub use inspector::{HandInfo, RigInspector, RigSummary};

pub fn crate_info() -> &'static str {
    "handrig-tools v0.1.0"
}
