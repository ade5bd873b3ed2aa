use glam::{EulerRot, Quat, Vec3};

use handrig_input::FrameInput;

use crate::config::SimConfig;

/// The rig's own pose: world position plus a pitch/yaw accumulator.
///
/// The orientation is never rotated incrementally; it is always exactly
/// the Euler of the accumulator, set absolutely each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigTransform {
    pub position: Vec3,
    pub pitch_degrees: f32,
    pub yaw_degrees: f32,
}

impl Default for RigTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            pitch_degrees: 0.0,
            yaw_degrees: 0.0,
        }
    }
}

impl RigTransform {
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_degrees.to_radians(),
            self.pitch_degrees.to_radians(),
            0.0,
        )
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }
}

/// Apply discrete step rotation on the rising edges of the four
/// directional keys.
pub fn step_rotation(rig: &mut RigTransform, config: &SimConfig, input: FrameInput<'_>) {
    let step = config.rotation_step_degrees;
    let b = &config.bindings;
    if input.pressed(b.rotate_down) {
        rig.pitch_degrees += step;
    }
    if input.pressed(b.rotate_up) {
        rig.pitch_degrees -= step;
    }
    if input.pressed(b.rotate_left) {
        rig.yaw_degrees -= step;
    }
    if input.pressed(b.rotate_right) {
        rig.yaw_degrees += step;
    }
}

/// Sprint factor for this tick: recomputed fresh from the held key,
/// never latched.
pub fn sprint_multiplier(config: &SimConfig, input: FrameInput<'_>) -> f32 {
    if input.held(config.bindings.sprint) {
        config.player_sprint_multiplier
    } else {
        1.0
    }
}

/// Translate the rig along its own axes from the held movement keys.
///
/// Forward wins over backward, left over right; the two axes are
/// independent (no diagonal normalization).
pub fn translate(rig: &mut RigTransform, config: &SimConfig, input: FrameInput<'_>, dt: f32) {
    let move_mod = dt * config.player_move_multiplier * sprint_multiplier(config, input);
    let b = &config.bindings;
    let forward = rig.forward();
    let right = rig.right();

    if input.held(b.move_forward) {
        rig.position += forward * move_mod;
    } else if input.held(b.move_backward) {
        rig.position -= forward * move_mod;
    }
    if input.held(b.move_left) {
        rig.position -= right * move_mod;
    } else if input.held(b.move_right) {
        rig.position += right * move_mod;
    }
}
