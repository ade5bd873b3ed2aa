use serde::{Deserialize, Serialize};

/// Physical key or pointer-button identifier.
///
/// Covers the keys the default bindings use plus the usual modifiers;
/// hosts translate their windowing layer's key codes into these before
/// building a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    MouseLeft,
    MouseRight,
    MouseMiddle,
    Tab,
    Space,
    Escape,
    LeftShift,
    LeftControl,
    LeftAlt,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyA,
    KeyD,
    KeyE,
    KeyF,
    KeyH,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyW,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_ordered_and_hashable() {
        use std::collections::BTreeSet;
        let mut set = BTreeSet::new();
        set.insert(Key::KeyW);
        set.insert(Key::KeyW);
        set.insert(Key::Tab);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn keys_serialize_by_name() {
        let json = serde_json::to_string(&Key::MouseRight).unwrap();
        assert_eq!(json, "\"MouseRight\"");
    }
}
