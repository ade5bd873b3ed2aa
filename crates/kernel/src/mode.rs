use glam::Vec2;

use handrig_input::{DeviceSnapshot, FrameInput};

use crate::config::{PointerInputMode, SimConfig};

/// Input-mode state machine: pointer-lock bookkeeping and the stateful
/// pointer-delta reference point.
///
/// In `Always` mode pointer motion is unconditionally accepted and none
/// of the lock/reset logic runs. In `RequiresButtonPress` mode the
/// pointer-mode key gates input: with lock-to-view the lock follows the
/// held key level-triggered every tick; without it, the reference point
/// resets on the key's rising edge so the next delta starts at zero.
#[derive(Debug, Clone)]
pub struct ModeState {
    last_pointer: Vec2,
    pointer_locked: bool,
}

impl ModeState {
    pub fn new(initial_pointer: Vec2) -> Self {
        Self {
            last_pointer: initial_pointer,
            pointer_locked: false,
        }
    }

    /// Re-seed the reference point, called at activation.
    pub fn reset(&mut self, pointer: Vec2) {
        self.last_pointer = pointer;
        self.pointer_locked = false;
    }

    /// Per-tick update, re-evaluated every tick (not edge-triggered for
    /// the lock itself).
    pub fn update(&mut self, config: &SimConfig, input: FrameInput<'_>) {
        match config.input_mode {
            PointerInputMode::Always => {
                self.pointer_locked = false;
            }
            PointerInputMode::RequiresButtonPress => {
                if config.lock_pointer_to_view {
                    self.pointer_locked = input.held(config.bindings.pointer_mode_key);
                } else if input.pressed(config.bindings.pointer_mode_key) {
                    self.last_pointer = input.pointer();
                }
            }
        }
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Level-triggered: whether pointer motion currently counts as input.
    pub fn accepts_input(&self, config: &SimConfig, input: FrameInput<'_>) -> bool {
        config.input_mode == PointerInputMode::Always
            || input.held(config.bindings.pointer_mode_key)
    }

    /// Pointer delta for this read.
    ///
    /// Locked: the device's raw per-axis motion (lock implies relative
    /// reporting). Unlocked: difference against the last-seen absolute
    /// position, which this read updates, so a second read in the same
    /// tick yields zero.
    pub fn pointer_delta(&mut self, snapshot: &DeviceSnapshot) -> Vec2 {
        if self.pointer_locked {
            snapshot.raw_motion
        } else {
            let delta = snapshot.pointer - self.last_pointer;
            self.last_pointer = snapshot.pointer;
            delta
        }
    }
}
