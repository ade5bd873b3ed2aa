use handrig_common::HandSide;
use handrig_kernel::Simulator;

/// Rig inspector for developer tooling.
///
/// Provides read-only queries against a simulator for debugging and
/// session reporting.
pub struct RigInspector;

impl RigInspector {
    /// Produce a summary of the rig state.
    pub fn summary(sim: &Simulator) -> RigSummary {
        RigSummary {
            tick: sim.tick_count(),
            active: sim.is_active(),
            current_hand: sim.hands().current_side(),
            pointer_locked: sim.pointer_locked(),
            rig_position: sim.rig().position.to_array(),
            rig_yaw_degrees: sim.rig().yaw_degrees,
            rig_pitch_degrees: sim.rig().pitch_degrees,
        }
    }

    /// Snapshot one hand's pose and flags.
    pub fn inspect_hand(sim: &Simulator, side: HandSide) -> HandInfo {
        let hand = sim.hands().hand(side);
        let r = hand.rotation;
        HandInfo {
            side,
            position: hand.position.to_array(),
            rotation: [r.x, r.y, r.z, r.w],
            selected: hand.selected,
            visible: hand.visible,
        }
    }

    /// Render the published alias table, one `button -> key` line per
    /// logical button.
    pub fn alias_lines(sim: &Simulator) -> Vec<String> {
        sim.aliases()
            .iter()
            .map(|(button, key)| format!("{button} -> {key:?}"))
            .collect()
    }
}

/// Summary of rig state for the inspector.
#[derive(Debug, Clone)]
pub struct RigSummary {
    pub tick: u64,
    pub active: bool,
    pub current_hand: HandSide,
    pub pointer_locked: bool,
    pub rig_position: [f32; 3],
    pub rig_yaw_degrees: f32,
    pub rig_pitch_degrees: f32,
}

impl std::fmt::Display for RigSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rig: tick={} active={} hand={} locked={} pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1}",
            self.tick,
            self.active,
            self.current_hand,
            self.pointer_locked,
            self.rig_position[0],
            self.rig_position[1],
            self.rig_position[2],
            self.rig_yaw_degrees,
            self.rig_pitch_degrees,
        )
    }
}

/// Detailed info about a single hand.
#[derive(Debug, Clone)]
pub struct HandInfo {
    pub side: HandSide,
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub selected: bool,
    pub visible: bool,
}

impl std::fmt::Display for HandInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hand [{}] pos=({:.2}, {:.2}, {:.2}) selected={} visible={}",
            self.side,
            self.position[0],
            self.position[1],
            self.position[2],
            self.selected,
            self.visible,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrig_bridge::NullDeviceBridge;
    use handrig_input::DeviceSnapshot;
    use handrig_kernel::{RigRegistry, SimConfig};

    fn activated_sim() -> Simulator {
        let mut sim = Simulator::new(SimConfig::default());
        let mut registry = RigRegistry::new();
        sim.activate(&mut registry, &mut NullDeviceBridge, &DeviceSnapshot::new());
        sim
    }

    #[test]
    fn summary_of_fresh_simulator() {
        let sim = Simulator::new(SimConfig::default());
        let summary = RigInspector::summary(&sim);
        assert_eq!(summary.tick, 0);
        assert!(!summary.active);
        assert_eq!(summary.rig_position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn summary_reflects_activation() {
        let sim = activated_sim();
        let summary = RigInspector::summary(&sim);
        assert!(summary.active);
        assert_eq!(summary.current_hand, HandSide::Right);
    }

    #[test]
    fn hand_info_tracks_selection() {
        let sim = activated_sim();
        let right = RigInspector::inspect_hand(&sim, HandSide::Right);
        let left = RigInspector::inspect_hand(&sim, HandSide::Left);
        assert!(right.selected);
        assert!(!left.selected);
        assert!(left.visible);
    }

    #[test]
    fn alias_lines_cover_every_logical_button() {
        let sim = activated_sim();
        let lines = RigInspector::alias_lines(&sim);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().any(|l| l.starts_with("Trigger -> ")));
    }

    #[test]
    fn summary_display() {
        let sim = activated_sim();
        let s = format!("{}", RigInspector::summary(&sim));
        assert!(s.contains("tick=0"));
        assert!(s.contains("hand=right"));
    }

    #[test]
    fn hand_display() {
        let sim = activated_sim();
        let s = format!("{}", RigInspector::inspect_hand(&sim, HandSide::Left));
        assert!(s.contains("Hand [left]"));
        assert!(s.contains("selected=false"));
    }
}
