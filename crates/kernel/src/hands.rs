use glam::{Quat, Vec2, Vec3};

use handrig_common::{HandSide, ViewCamera};

/// One simulated hand. The selection flag is an observable side effect
/// consumed by the interaction stack (highlighting, input routing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandState {
    pub side: HandSide,
    pub position: Vec3,
    pub rotation: Quat,
    pub selected: bool,
    pub visible: bool,
}

impl HandState {
    fn new(side: HandSide) -> Self {
        Self {
            side,
            position: home_position(side),
            rotation: Quat::IDENTITY,
            selected: false,
            visible: true,
        }
    }
}

/// Rig-local rest pose for a hand.
pub fn home_position(side: HandSide) -> Vec3 {
    match side {
        HandSide::Left => Vec3::new(-0.2, 1.2, 0.5),
        HandSide::Right => Vec3::new(0.2, 1.2, 0.5),
    }
}

/// The pair of hands plus the current-hand reference.
///
/// Invariant: once constructed, exactly one hand has `selected == true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hands {
    left: HandState,
    right: HandState,
    current: HandSide,
}

impl Hands {
    /// Both hands at their home poses, right hand selected.
    pub fn new() -> Self {
        let mut hands = Self {
            left: HandState::new(HandSide::Left),
            right: HandState::new(HandSide::Right),
            current: HandSide::Right,
        };
        hands.select(HandSide::Right);
        hands
    }

    pub fn current_side(&self) -> HandSide {
        self.current
    }

    pub fn hand(&self, side: HandSide) -> &HandState {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }

    pub fn hand_mut(&mut self, side: HandSide) -> &mut HandState {
        match side {
            HandSide::Left => &mut self.left,
            HandSide::Right => &mut self.right,
        }
    }

    pub fn current(&self) -> &HandState {
        self.hand(self.current)
    }

    /// Make `side` the current hand, updating both selection flags in
    /// the same step.
    pub fn select(&mut self, side: HandSide) {
        self.current = side;
        self.left.selected = side == HandSide::Left;
        self.right.selected = side == HandSide::Right;
    }

    /// Flip the current hand; used on the change-hands key edge.
    pub fn switch(&mut self) {
        self.select(self.current.other());
    }

    /// Restore both hands to their home poses.
    pub fn reset_poses(&mut self) {
        for side in [HandSide::Left, HandSide::Right] {
            let hand = self.hand_mut(side);
            hand.position = home_position(side);
            hand.rotation = Quat::IDENTITY;
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.left.visible = visible;
        self.right.visible = visible;
    }

    /// Place the current hand on the camera ray through the pointer, at
    /// the configured reach. Runs every tick regardless of input-mode
    /// gating: the hand always tracks the view target.
    pub fn update_current_position(&mut self, camera: &ViewCamera, pointer: Vec2, reach: f32) {
        let ray = camera.screen_point_to_ray(pointer);
        let position = camera.position + ray.direction * reach;
        self.hand_mut(self.current).position = position;
    }
}

impl Default for Hands {
    fn default() -> Self {
        Self::new()
    }
}
