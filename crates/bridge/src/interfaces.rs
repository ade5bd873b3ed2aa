use std::sync::Arc;

use glam::Vec3;
use handrig_common::{HandSide, Ray, TargetId};
use handrig_input::ButtonAliasTable;

/// Nearest collidable hit returned by a scene ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub target: TargetId,
    pub distance: f32,
    pub point: Vec3,
    /// Whether the hit object exposes the interactable capability.
    pub interactable: bool,
}

/// Scene geometry query surface. Implementations return the nearest
/// collidable hit along the ray, if any.
pub trait SceneRaycaster {
    fn cast(&self, ray: Ray) -> Option<RayHit>;
}

/// Controller device abstraction the alias table is published to.
///
/// A bridge that does not understand button aliasing reports `false`
/// and is silently skipped; the simulator never inspects the concrete
/// bridge type.
pub trait DeviceBridge {
    fn supports_button_aliasing(&self) -> bool {
        false
    }

    /// Accepts the alias table once per activation. The table is shared,
    /// not copied, so the bridge reads key mappings live through it.
    fn set_button_aliases(&mut self, aliases: Arc<ButtonAliasTable>);
}

/// Per-hand interaction stack the grab trigger drives.
///
/// The simulator only triggers interaction; it never owns grab state.
pub trait InteractionBridge {
    /// The object currently grabbed by the given hand, if any.
    fn grabbed_object(&self, side: HandSide) -> Option<TargetId>;

    /// Force a touch event on the target through the hand's touch
    /// controller.
    fn force_touch(&mut self, side: HandSide, target: TargetId);

    /// Ask the hand's grab controller to attempt a grab of whatever it
    /// is touching.
    fn attempt_grab(&mut self, side: HandSide);
}
