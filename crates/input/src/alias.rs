use serde::{Deserialize, Serialize};

use crate::bindings::KeyBindings;
use crate::keys::Key;

/// Logical controller button exposed to the device bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogicalButton {
    Trigger,
    Grip,
    TouchpadPress,
    ButtonOne,
    ButtonTwo,
    StartMenu,
    TouchModifier,
    HairTouchModifier,
}

impl LogicalButton {
    /// The fixed button set, in publication order.
    pub const ALL: [LogicalButton; 8] = [
        Self::Trigger,
        Self::Grip,
        Self::TouchpadPress,
        Self::ButtonOne,
        Self::ButtonTwo,
        Self::StartMenu,
        Self::TouchModifier,
        Self::HairTouchModifier,
    ];
}

impl std::fmt::Display for LogicalButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trigger => "Trigger",
            Self::Grip => "Grip",
            Self::TouchpadPress => "TouchpadPress",
            Self::ButtonOne => "ButtonOne",
            Self::ButtonTwo => "ButtonTwo",
            Self::StartMenu => "StartMenu",
            Self::TouchModifier => "TouchModifier",
            Self::HairTouchModifier => "HairTouchModifier",
        };
        write!(f, "{name}")
    }
}

/// Read-only mapping from logical controller buttons to physical keys.
///
/// Built once at activation from the configured bindings and shared with
/// the device bridge, which reads physical-key state live through it.
/// Every logical button always has a binding, so lookups are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAliasTable {
    trigger: Key,
    grip: Key,
    touchpad_press: Key,
    button_one: Key,
    button_two: Key,
    start_menu: Key,
    touch_modifier: Key,
    hair_touch_modifier: Key,
}

impl ButtonAliasTable {
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        Self {
            trigger: bindings.trigger,
            grip: bindings.grip,
            touchpad_press: bindings.touchpad_press,
            button_one: bindings.button_one,
            button_two: bindings.button_two,
            start_menu: bindings.start_menu,
            touch_modifier: bindings.touch_modifier,
            hair_touch_modifier: bindings.hair_touch_modifier,
        }
    }

    pub fn key_for(&self, button: LogicalButton) -> Key {
        match button {
            LogicalButton::Trigger => self.trigger,
            LogicalButton::Grip => self.grip,
            LogicalButton::TouchpadPress => self.touchpad_press,
            LogicalButton::ButtonOne => self.button_one,
            LogicalButton::ButtonTwo => self.button_two,
            LogicalButton::StartMenu => self.start_menu,
            LogicalButton::TouchModifier => self.touch_modifier,
            LogicalButton::HairTouchModifier => self.hair_touch_modifier,
        }
    }

    /// All (button, key) pairs in the fixed publication order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalButton, Key)> + '_ {
        LogicalButton::ALL.iter().map(|&b| (b, self.key_for(b)))
    }
}

impl Default for ButtonAliasTable {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}
