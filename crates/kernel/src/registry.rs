use handrig_common::RigId;
use tracing::error;

/// Lookup table mapping the process to its live rig, replacing any
/// static shared state.
///
/// # Invariants
/// - At most one rig is registered at a time.
/// - After a rig unregisters, `find` returns `None`; it never hands out
///   the stale id.
/// - The missing-rig diagnostic fires only while no rig has ever been
///   torn down; after a deliberate teardown, silence is expected.
#[derive(Debug, Default)]
pub struct RigRegistry {
    registered: Option<RigId>,
    ever_destroyed: bool,
}

impl RigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: RigId) {
        self.registered = Some(id);
        self.ever_destroyed = false;
    }

    pub fn unregister(&mut self, id: RigId) {
        if self.registered == Some(id) {
            self.registered = None;
            self.ever_destroyed = true;
        }
    }

    /// Resolve the live rig, if any.
    pub fn find(&self) -> Option<RigId> {
        if self.registered.is_none() && !self.ever_destroyed {
            error!("no simulator rig is registered; was a rig ever activated?");
        }
        self.registered
    }

    pub fn is_registered(&self, id: RigId) -> bool {
        self.registered == Some(id)
    }
}
