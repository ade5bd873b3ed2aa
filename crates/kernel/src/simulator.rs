use std::sync::Arc;

use glam::Vec2;

use handrig_bridge::{DeviceBridge, InteractionBridge, SceneRaycaster};
use handrig_common::{HandSide, RigId, ViewCamera};
use handrig_input::{ButtonAliasTable, DeviceSnapshot, FrameInput};
use tracing::debug;

use crate::config::SimConfig;
use crate::hands::Hands;
use crate::mode::ModeState;
use crate::motion::{self, RigTransform};
use crate::registry::RigRegistry;
use crate::targeting;

/// The simulated controller rig: both hands, the rig transform, and the
/// per-tick input state machine.
///
/// # Invariants
/// - Exactly one hand is selected at any time after activation.
/// - Edges are derived by pairing the previous tick's snapshot with the
///   current one; no cross-tick locks are retained.
/// - The alias table is published once per activation, and only to a
///   bridge that reports the aliasing capability.
#[derive(Debug)]
pub struct Simulator {
    id: RigId,
    config: SimConfig,
    hands: Hands,
    rig: RigTransform,
    mode: ModeState,
    aliases: Arc<ButtonAliasTable>,
    previous: DeviceSnapshot,
    tick_count: u64,
    active: bool,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        let aliases = Arc::new(ButtonAliasTable::from_bindings(&config.bindings));
        Self {
            id: RigId::new(),
            config,
            hands: Hands::new(),
            rig: RigTransform::default(),
            mode: ModeState::new(Vec2::ZERO),
            aliases,
            previous: DeviceSnapshot::new(),
            tick_count: 0,
            active: false,
        }
    }

    /// Bring the rig online: register it, run the mode-switch sequence
    /// for the hands, seed the input state from the initial snapshot,
    /// and publish the alias table if the bridge understands it.
    pub fn activate(
        &mut self,
        registry: &mut RigRegistry,
        device: &mut dyn DeviceBridge,
        initial: &DeviceSnapshot,
    ) {
        registry.register(self.id);

        self.enter_move_mode();
        self.enter_hand_mode();
        self.hands.select(HandSide::Right);

        self.mode.reset(initial.pointer);
        self.previous = initial.clone();

        if device.supports_button_aliasing() {
            device.set_button_aliases(Arc::clone(&self.aliases));
        }
        self.active = true;
        debug!(rig = %self.id, "simulator activated");
    }

    /// Take the rig offline and release its registry slot.
    pub fn deactivate(&mut self, registry: &mut RigRegistry) {
        registry.unregister(self.id);
        self.active = false;
        debug!(rig = %self.id, "simulator deactivated");
    }

    fn enter_move_mode(&mut self) {
        if self.config.hide_hands_on_switch {
            self.hands.set_visible(false);
        }
    }

    fn enter_hand_mode(&mut self) {
        self.hands.set_visible(true);
        if self.config.reset_hands_on_switch {
            self.hands.reset_poses();
        }
    }

    /// One simulation tick. Order: mode update, hand-switch edge, hand
    /// pose, step rotation, grab trigger, translation.
    pub fn tick(
        &mut self,
        dt: f32,
        snapshot: &DeviceSnapshot,
        camera: &ViewCamera,
        scene: &dyn SceneRaycaster,
        interaction: &mut dyn InteractionBridge,
    ) {
        if !self.active {
            return;
        }
        let input = FrameInput::new(&self.previous, snapshot);

        self.mode.update(&self.config, input);

        if input.pressed(self.config.bindings.change_hands) {
            self.hands.switch();
        }

        // The current hand tracks the pointer ray every tick, even while
        // pointer input is otherwise gated by the mode key.
        self.hands
            .update_current_position(camera, snapshot.pointer, self.config.hand_reach);

        motion::step_rotation(&mut self.rig, &self.config, input);
        targeting::update(&self.config, input, camera, scene, interaction);
        motion::translate(&mut self.rig, &self.config, input, dt);

        self.previous = snapshot.clone();
        self.tick_count += 1;
    }

    pub fn id(&self) -> RigId {
        self.id
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    pub fn rig(&self) -> &RigTransform {
        &self.rig
    }

    pub fn aliases(&self) -> &Arc<ButtonAliasTable> {
        &self.aliases
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pointer_locked(&self) -> bool {
        self.mode.pointer_locked()
    }

    /// Stateful pointer-delta read against the mode machine's reference
    /// point; see `ModeState::pointer_delta`.
    pub fn pointer_delta(&mut self, snapshot: &DeviceSnapshot) -> Vec2 {
        self.mode.pointer_delta(snapshot)
    }
}
