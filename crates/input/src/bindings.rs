use serde::{Deserialize, Serialize};

use crate::keys::Key;

/// Caller-owned physical-key bindings for every logical action the
/// simulator reads. The core never mutates these; hosts may load them
/// from a config file or construct them in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Enables pointer input while held when the input mode requires a
    /// button press.
    pub pointer_mode_key: Key,
    /// Switches the current hand between left and right.
    pub change_hands: Key,
    /// Distance pickup with the left hand.
    pub pickup_left: Key,
    /// Distance pickup with the right hand.
    pub pickup_right: Key,
    /// Must be held for either pickup key to fire.
    pub pickup_modifier: Key,

    pub move_forward: Key,
    pub move_left: Key,
    pub move_backward: Key,
    pub move_right: Key,
    pub sprint: Key,

    pub rotate_up: Key,
    pub rotate_down: Key,
    pub rotate_left: Key,
    pub rotate_right: Key,

    // Controller button aliases, published to the device bridge.
    pub trigger: Key,
    pub grip: Key,
    pub touchpad_press: Key,
    pub button_one: Key,
    pub button_two: Key,
    pub start_menu: Key,
    pub touch_modifier: Key,
    pub hair_touch_modifier: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pointer_mode_key: Key::MouseRight,
            change_hands: Key::Tab,
            pickup_left: Key::MouseLeft,
            pickup_right: Key::MouseRight,
            pickup_modifier: Key::LeftControl,

            move_forward: Key::KeyW,
            move_left: Key::KeyA,
            move_backward: Key::KeyS,
            move_right: Key::KeyD,
            sprint: Key::LeftShift,

            rotate_up: Key::ArrowUp,
            rotate_down: Key::ArrowDown,
            rotate_left: Key::ArrowLeft,
            rotate_right: Key::ArrowRight,

            trigger: Key::MouseRight,
            grip: Key::MouseLeft,
            touchpad_press: Key::KeyQ,
            button_one: Key::KeyE,
            button_two: Key::KeyR,
            start_menu: Key::KeyF,
            touch_modifier: Key::KeyT,
            hair_touch_modifier: Key::KeyH,
        }
    }
}
