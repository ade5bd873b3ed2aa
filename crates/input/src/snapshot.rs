use std::collections::BTreeSet;

use glam::Vec2;

use crate::keys::Key;

/// One tick's non-blocking sample of the keyboard/pointer devices.
///
/// `raw_motion` is the device's relative per-axis motion for this tick;
/// it is only meaningful while the host has the pointer locked, where
/// absolute positions stop updating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSnapshot {
    held: BTreeSet<Key>,
    pub pointer: Vec2,
    pub raw_motion: Vec2,
}

impl DeviceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_held(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.held.extend(keys);
        self
    }

    pub fn with_pointer(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_raw_motion(mut self, motion: Vec2) -> Self {
        self.raw_motion = motion;
        self
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// This tick's snapshot paired with the previous tick's.
///
/// All edge/level queries in the simulator go through this one type, so
/// edge derivation is a single deterministic comparison of two samples.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    current: &'a DeviceSnapshot,
    previous: &'a DeviceSnapshot,
}

impl<'a> FrameInput<'a> {
    pub fn new(previous: &'a DeviceSnapshot, current: &'a DeviceSnapshot) -> Self {
        Self { current, previous }
    }

    /// Level-triggered: true for every tick the key is down.
    pub fn held(&self, key: Key) -> bool {
        self.current.is_held(key)
    }

    /// Edge-triggered: true only on the tick the key goes down.
    pub fn pressed(&self, key: Key) -> bool {
        self.current.is_held(key) && !self.previous.is_held(key)
    }

    /// Edge-triggered: true only on the tick the key comes up.
    pub fn released(&self, key: Key) -> bool {
        !self.current.is_held(key) && self.previous.is_held(key)
    }

    /// Current absolute pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.current.pointer
    }

    /// Relative per-axis pointer motion reported for this tick.
    pub fn raw_motion(&self) -> Vec2 {
        self.current.raw_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_is_level_triggered() {
        let prev = DeviceSnapshot::new().with_held([Key::KeyW]);
        let cur = DeviceSnapshot::new().with_held([Key::KeyW]);
        let input = FrameInput::new(&prev, &cur);
        assert!(input.held(Key::KeyW));
        assert!(!input.pressed(Key::KeyW));
    }

    #[test]
    fn pressed_fires_only_on_rising_edge() {
        let up = DeviceSnapshot::new();
        let down = DeviceSnapshot::new().with_held([Key::Tab]);

        let rising = FrameInput::new(&up, &down);
        assert!(rising.pressed(Key::Tab));

        let holding = FrameInput::new(&down, &down);
        assert!(!holding.pressed(Key::Tab));
        assert!(holding.held(Key::Tab));
    }

    #[test]
    fn released_fires_only_on_falling_edge() {
        let up = DeviceSnapshot::new();
        let down = DeviceSnapshot::new().with_held([Key::Tab]);

        let falling = FrameInput::new(&down, &up);
        assert!(falling.released(Key::Tab));
        assert!(!falling.held(Key::Tab));

        let idle = FrameInput::new(&up, &up);
        assert!(!idle.released(Key::Tab));
    }

    #[test]
    fn press_release_roundtrip() {
        let mut snap = DeviceSnapshot::new();
        snap.press(Key::KeyQ);
        assert!(snap.is_held(Key::KeyQ));
        snap.release(Key::KeyQ);
        assert!(!snap.is_held(Key::KeyQ));
    }

    #[test]
    fn pointer_and_motion_come_from_current() {
        let prev = DeviceSnapshot::new().with_pointer(Vec2::new(10.0, 10.0));
        let cur = DeviceSnapshot::new()
            .with_pointer(Vec2::new(42.0, 7.0))
            .with_raw_motion(Vec2::new(1.5, -2.0));
        let input = FrameInput::new(&prev, &cur);
        assert_eq!(input.pointer(), Vec2::new(42.0, 7.0));
        assert_eq!(input.raw_motion(), Vec2::new(1.5, -2.0));
    }
}
