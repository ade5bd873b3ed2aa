use glam::Vec2;

use handrig_bridge::{InteractionBridge, SceneRaycaster};
use handrig_common::{HandSide, ViewCamera};
use handrig_input::FrameInput;
use tracing::trace;

use crate::config::SimConfig;

/// Check the edge-triggered pickup keys and fire the grab trigger.
///
/// The right-hand pickup edge is checked first; at most one pickup fires
/// per tick. Both require the pickup modifier to be held.
pub fn update(
    config: &SimConfig,
    input: FrameInput<'_>,
    camera: &ViewCamera,
    scene: &dyn SceneRaycaster,
    interaction: &mut dyn InteractionBridge,
) {
    let b = &config.bindings;
    if !input.held(b.pickup_modifier) {
        return;
    }
    if input.pressed(b.pickup_right) {
        try_pickup(HandSide::Right, camera, scene, interaction);
    } else if input.pressed(b.pickup_left) {
        try_pickup(HandSide::Left, camera, scene, interaction);
    }
}

/// Cast through the view center and, if the nearest hit is interactable
/// and the hand is empty, force a touch and attempt a grab.
///
/// No hit, a non-interactable hit, or a full hand are silent no-ops.
fn try_pickup(
    side: HandSide,
    camera: &ViewCamera,
    scene: &dyn SceneRaycaster,
    interaction: &mut dyn InteractionBridge,
) {
    let ray = camera.viewport_point_to_ray(Vec2::new(0.5, 0.5));
    let Some(hit) = scene.cast(ray) else {
        return;
    };
    if !hit.interactable {
        return;
    }
    if interaction.grabbed_object(side).is_some() {
        trace!(%side, "pickup ignored, hand already holds an object");
        return;
    }
    trace!(%side, target = ?hit.target, distance = hit.distance, "grab trigger");
    interaction.force_touch(side, hit.target);
    interaction.attempt_grab(side);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use handrig_bridge::{RecordingBridge, SceneTarget, StaticScene};
    use handrig_common::TargetId;
    use handrig_input::{DeviceSnapshot, Key};

    // Camera at the origin looking down -Z.
    fn camera() -> ViewCamera {
        ViewCamera {
            position: Vec3::ZERO,
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            ..ViewCamera::default()
        }
    }

    fn scene_with_target() -> (StaticScene, TargetId) {
        let target = SceneTarget::interactable(Vec3::new(0.0, 0.0, -5.0), 1.0);
        (StaticScene::new(vec![target]), target.id)
    }

    fn pickup_right_edge() -> (DeviceSnapshot, DeviceSnapshot) {
        let prev = DeviceSnapshot::new().with_held([Key::LeftControl]);
        let cur = DeviceSnapshot::new().with_held([Key::LeftControl, Key::MouseRight]);
        (prev, cur)
    }

    #[test]
    fn pickup_edge_fires_touch_then_grab_once() {
        let config = SimConfig::default();
        let (scene, target) = scene_with_target();
        let mut bridge = RecordingBridge::new();
        let (prev, cur) = pickup_right_edge();

        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert_eq!(bridge.touches(), &[(HandSide::Right, target)]);
        assert_eq!(bridge.grab_attempts(), &[HandSide::Right]);

        // Key still held next tick: no second fire.
        update(
            &config,
            FrameInput::new(&cur, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );
        assert_eq!(bridge.touches().len(), 1);
        assert_eq!(bridge.grab_attempts().len(), 1);
    }

    #[test]
    fn pickup_requires_modifier_held() {
        let config = SimConfig::default();
        let (scene, _) = scene_with_target();
        let mut bridge = RecordingBridge::new();

        let prev = DeviceSnapshot::new();
        let cur = DeviceSnapshot::new().with_held([Key::MouseRight]);
        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert!(bridge.touches().is_empty());
        assert!(bridge.grab_attempts().is_empty());
    }

    #[test]
    fn left_pickup_routes_to_left_hand() {
        let config = SimConfig::default();
        let (scene, target) = scene_with_target();
        let mut bridge = RecordingBridge::new();

        let prev = DeviceSnapshot::new().with_held([Key::LeftControl]);
        let cur = DeviceSnapshot::new().with_held([Key::LeftControl, Key::MouseLeft]);
        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert_eq!(bridge.touches(), &[(HandSide::Left, target)]);
        assert_eq!(bridge.grab_attempts(), &[HandSide::Left]);
    }

    #[test]
    fn full_hand_ignores_pickup_edges() {
        let config = SimConfig::default();
        let (scene, _) = scene_with_target();
        let mut bridge = RecordingBridge::new();
        bridge.set_grabbed(HandSide::Right, Some(TargetId::new()));
        let (prev, cur) = pickup_right_edge();

        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert!(bridge.touches().is_empty());
        assert!(bridge.grab_attempts().is_empty());
    }

    #[test]
    fn no_raycast_hit_is_a_silent_no_op() {
        let config = SimConfig::default();
        let scene = StaticScene::default();
        let mut bridge = RecordingBridge::new();
        let (prev, cur) = pickup_right_edge();

        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert!(bridge.touches().is_empty());
        assert!(bridge.grab_attempts().is_empty());
    }

    #[test]
    fn non_interactable_hit_is_skipped() {
        let config = SimConfig::default();
        let scene = StaticScene::new(vec![SceneTarget::scenery(Vec3::new(0.0, 0.0, -5.0), 1.0)]);
        let mut bridge = RecordingBridge::new();
        let (prev, cur) = pickup_right_edge();

        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert!(bridge.touches().is_empty());
    }

    #[test]
    fn nearest_hit_decides_even_when_occluder_is_scenery() {
        let config = SimConfig::default();
        // A wall in front of the interactable target: the nearest hit is
        // the wall, which is not interactable, so nothing fires.
        let wall = SceneTarget::scenery(Vec3::new(0.0, 0.0, -3.0), 0.5);
        let prize = SceneTarget::interactable(Vec3::new(0.0, 0.0, -8.0), 0.5);
        let scene = StaticScene::new(vec![prize, wall]);
        let mut bridge = RecordingBridge::new();
        let (prev, cur) = pickup_right_edge();

        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert!(bridge.touches().is_empty());
    }

    #[test]
    fn right_pickup_wins_when_both_edges_fire() {
        let config = SimConfig::default();
        let (scene, _) = scene_with_target();
        let mut bridge = RecordingBridge::new();

        let prev = DeviceSnapshot::new().with_held([Key::LeftControl]);
        let cur =
            DeviceSnapshot::new().with_held([Key::LeftControl, Key::MouseLeft, Key::MouseRight]);
        update(
            &config,
            FrameInput::new(&prev, &cur),
            &camera(),
            &scene,
            &mut bridge,
        );

        assert_eq!(bridge.grab_attempts(), &[HandSide::Right]);
    }
}
