//! In-memory collaborator implementations.
//!
//! Small and deterministic; they back the CLI demo and the kernel's
//! tests, exercising every trigger path without real hardware.

use std::sync::Arc;

use glam::Vec3;
use handrig_common::{HandSide, Ray, TargetId};
use handrig_input::ButtonAliasTable;
use tracing::debug;

use crate::interfaces::{DeviceBridge, InteractionBridge, RayHit, SceneRaycaster};

/// A sphere-shaped collidable target.
#[derive(Debug, Clone, Copy)]
pub struct SceneTarget {
    pub id: TargetId,
    pub center: Vec3,
    pub radius: f32,
    pub interactable: bool,
}

impl SceneTarget {
    pub fn interactable(center: Vec3, radius: f32) -> Self {
        Self {
            id: TargetId::new(),
            center,
            radius,
            interactable: true,
        }
    }

    pub fn scenery(center: Vec3, radius: f32) -> Self {
        Self {
            id: TargetId::new(),
            center,
            radius,
            interactable: false,
        }
    }
}

/// Fixed set of sphere targets with nearest-hit ray casting.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    targets: Vec<SceneTarget>,
}

impl StaticScene {
    pub fn new(targets: Vec<SceneTarget>) -> Self {
        Self { targets }
    }

    pub fn add(&mut self, target: SceneTarget) {
        self.targets.push(target);
    }

    pub fn targets(&self) -> &[SceneTarget] {
        &self.targets
    }
}

impl SceneRaycaster for StaticScene {
    fn cast(&self, ray: Ray) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for target in &self.targets {
            let Some(t) = ray_sphere_distance(ray, target.center, target.radius) else {
                continue;
            };
            if nearest.is_none_or(|hit| t < hit.distance) {
                nearest = Some(RayHit {
                    target: target.id,
                    distance: t,
                    point: ray.at(t),
                    interactable: target.interactable,
                });
            }
        }
        nearest
    }
}

/// Smallest non-negative ray parameter hitting the sphere, if any.
fn ray_sphere_distance(ray: Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let near = -b - sqrt_disc;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sqrt_disc;
    (far >= 0.0).then_some(far)
}

/// Interaction bridge that records every touch/grab call.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    grabbed_left: Option<TargetId>,
    grabbed_right: Option<TargetId>,
    touches: Vec<(HandSide, TargetId)>,
    grab_attempts: Vec<HandSide>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a grabbed object so the hand reports as full.
    pub fn set_grabbed(&mut self, side: HandSide, target: Option<TargetId>) {
        match side {
            HandSide::Left => self.grabbed_left = target,
            HandSide::Right => self.grabbed_right = target,
        }
    }

    pub fn touches(&self) -> &[(HandSide, TargetId)] {
        &self.touches
    }

    pub fn grab_attempts(&self) -> &[HandSide] {
        &self.grab_attempts
    }
}

impl InteractionBridge for RecordingBridge {
    fn grabbed_object(&self, side: HandSide) -> Option<TargetId> {
        match side {
            HandSide::Left => self.grabbed_left,
            HandSide::Right => self.grabbed_right,
        }
    }

    fn force_touch(&mut self, side: HandSide, target: TargetId) {
        self.touches.push((side, target));
    }

    fn attempt_grab(&mut self, side: HandSide) {
        self.grab_attempts.push(side);
    }
}

/// Device bridge that understands button aliasing and keeps the shared
/// table around for live reads.
#[derive(Debug, Clone, Default)]
pub struct LoggingDeviceBridge {
    aliases: Option<Arc<ButtonAliasTable>>,
}

impl LoggingDeviceBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aliases(&self) -> Option<&Arc<ButtonAliasTable>> {
        self.aliases.as_ref()
    }
}

impl DeviceBridge for LoggingDeviceBridge {
    fn supports_button_aliasing(&self) -> bool {
        true
    }

    fn set_button_aliases(&mut self, aliases: Arc<ButtonAliasTable>) {
        for (button, key) in aliases.iter() {
            debug!(%button, ?key, "button alias published");
        }
        self.aliases = Some(aliases);
    }
}

/// Device bridge without aliasing support; publication is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDeviceBridge;

impl DeviceBridge for NullDeviceBridge {
    fn set_button_aliases(&mut self, _aliases: Arc<ButtonAliasTable>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn cast_misses_empty_scene() {
        let scene = StaticScene::default();
        assert!(scene.cast(forward_ray()).is_none());
    }

    #[test]
    fn cast_hits_sphere_on_ray() {
        let target = SceneTarget::interactable(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let scene = StaticScene::new(vec![target]);
        let hit = scene.cast(forward_ray()).unwrap();
        assert_eq!(hit.target, target.id);
        assert!((hit.distance - 4.0).abs() < 1e-4);
        assert!(hit.interactable);
    }

    #[test]
    fn cast_returns_nearest_of_two() {
        let near = SceneTarget::interactable(Vec3::new(0.0, 0.0, -3.0), 0.5);
        let far = SceneTarget::interactable(Vec3::new(0.0, 0.0, -10.0), 0.5);
        let scene = StaticScene::new(vec![far, near]);
        let hit = scene.cast(forward_ray()).unwrap();
        assert_eq!(hit.target, near.id);
    }

    #[test]
    fn cast_ignores_spheres_behind_origin() {
        let behind = SceneTarget::interactable(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let scene = StaticScene::new(vec![behind]);
        assert!(scene.cast(forward_ray()).is_none());
    }

    #[test]
    fn cast_from_inside_sphere_hits_exit() {
        let around = SceneTarget::scenery(Vec3::ZERO, 2.0);
        let scene = StaticScene::new(vec![around]);
        let hit = scene.cast(forward_ray()).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-4);
        assert!(!hit.interactable);
    }

    #[test]
    fn recording_bridge_tracks_calls_per_hand() {
        let mut bridge = RecordingBridge::new();
        let target = TargetId::new();

        assert!(bridge.grabbed_object(HandSide::Right).is_none());
        bridge.force_touch(HandSide::Right, target);
        bridge.attempt_grab(HandSide::Right);

        assert_eq!(bridge.touches(), &[(HandSide::Right, target)]);
        assert_eq!(bridge.grab_attempts(), &[HandSide::Right]);

        bridge.set_grabbed(HandSide::Right, Some(target));
        assert_eq!(bridge.grabbed_object(HandSide::Right), Some(target));
        assert!(bridge.grabbed_object(HandSide::Left).is_none());
    }

    #[test]
    fn logging_bridge_reports_alias_capability() {
        let mut bridge = LoggingDeviceBridge::new();
        assert!(bridge.supports_button_aliasing());
        bridge.set_button_aliases(Arc::new(ButtonAliasTable::default()));
        assert!(bridge.aliases().is_some());
    }

    #[test]
    fn null_bridge_has_no_alias_capability() {
        let bridge = NullDeviceBridge;
        assert!(!bridge.supports_button_aliasing());
    }
}
