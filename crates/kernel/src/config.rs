use serde::{Deserialize, Serialize};

use handrig_input::KeyBindings;

/// Whether pointer motion always counts as input or only while the
/// pointer-mode key is held. Fixed for the session; the simulator never
/// changes it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerInputMode {
    #[default]
    Always,
    RequiresButtonPress,
}

/// Caller-owned simulator configuration. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Hand movement speed adjustment.
    pub hand_move_multiplier: f32,
    /// Hand rotation speed adjustment.
    pub hand_rotation_multiplier: f32,
    /// Player movement speed adjustment.
    pub player_move_multiplier: f32,
    /// Player rotation speed adjustment.
    pub player_rotation_multiplier: f32,
    /// Speed factor applied while the sprint key is held.
    pub player_sprint_multiplier: f32,
    /// Distance from the camera at which the current hand is held.
    pub hand_reach: f32,
    /// Angular step applied per rotation-key press, in degrees.
    pub rotation_step_degrees: f32,
    /// Hide hands when entering move mode.
    pub hide_hands_on_switch: bool,
    /// Reset hand poses when entering hand mode.
    pub reset_hands_on_switch: bool,
    /// Lock the pointer to the view while the pointer-mode key is held.
    pub lock_pointer_to_view: bool,
    pub input_mode: PointerInputMode,
    pub bindings: KeyBindings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hand_move_multiplier: 0.002,
            hand_rotation_multiplier: 0.5,
            player_move_multiplier: 5.0,
            player_rotation_multiplier: 0.5,
            player_sprint_multiplier: 2.0,
            hand_reach: 2.0,
            rotation_step_degrees: 15.0,
            hide_hands_on_switch: false,
            reset_hands_on_switch: true,
            lock_pointer_to_view: true,
            input_mode: PointerInputMode::Always,
            bindings: KeyBindings::default(),
        }
    }
}

/// Errors from configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositiveMultiplier { name: &'static str, value: f32 },
    #[error("rotation step must be in (0, 180] degrees, got {0}")]
    RotationStepOutOfRange(f32),
}

impl SimConfig {
    /// Check numeric fields before handing the config to a simulator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("hand_move_multiplier", self.hand_move_multiplier),
            ("hand_rotation_multiplier", self.hand_rotation_multiplier),
            ("player_move_multiplier", self.player_move_multiplier),
            ("player_rotation_multiplier", self.player_rotation_multiplier),
            ("player_sprint_multiplier", self.player_sprint_multiplier),
            ("hand_reach", self.hand_reach),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveMultiplier { name, value });
            }
        }
        if !self.rotation_step_degrees.is_finite()
            || self.rotation_step_degrees <= 0.0
            || self.rotation_step_degrees > 180.0
        {
            return Err(ConfigError::RotationStepOutOfRange(
                self.rotation_step_degrees,
            ));
        }
        Ok(())
    }
}
