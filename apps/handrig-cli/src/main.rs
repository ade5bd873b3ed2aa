use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use handrig_bridge::{LoggingDeviceBridge, RecordingBridge, SceneTarget, StaticScene};
use handrig_common::{HandSide, ViewCamera};
use handrig_input::{DeviceSnapshot, Key, KeyBindings};
use handrig_kernel::{RigRegistry, SimConfig, Simulator};
use handrig_tools::RigInspector;

#[derive(Parser)]
#[command(name = "handrig-cli", about = "CLI tool for handrig operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print simulator version and crate info
    Info,
    /// Run a scripted simulation session
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "60")]
        ticks: u64,
        /// Tick duration in seconds
        #[arg(short, long, default_value = "0.016")]
        dt: f32,
    },
    /// Load key bindings from a JSON file and print the alias table
    Bindings {
        /// Path to a bindings JSON file; defaults are printed if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("handrig-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", handrig_common::crate_info());
            println!("input: {}", handrig_input::crate_info());
            println!("bridge: {}", handrig_bridge::crate_info());
            println!("kernel: {}", handrig_kernel::crate_info());
            println!("tools: {}", handrig_tools::crate_info());
        }
        Commands::Simulate { ticks, dt } => run_session(ticks, dt)?,
        Commands::Bindings { file } => {
            let bindings = match file {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading bindings from {}", path.display()))?;
                    serde_json::from_str(&text)
                        .with_context(|| format!("parsing bindings from {}", path.display()))?
                }
                None => KeyBindings::default(),
            };
            let config = SimConfig {
                bindings,
                ..SimConfig::default()
            };
            config.validate().context("invalid configuration")?;

            let sim = Simulator::new(config);
            println!("Button aliases:");
            for line in RigInspector::alias_lines(&sim) {
                println!("  {line}");
            }
        }
    }

    Ok(())
}

/// Scripted demo: walk forward, switch hands, grab the target ahead.
fn run_session(ticks: u64, dt: f32) -> anyhow::Result<()> {
    let config = SimConfig::default();
    config.validate().context("invalid configuration")?;

    let camera = ViewCamera::default();
    let scene = StaticScene::new(vec![
        SceneTarget::interactable(camera.position + camera.forward() * 4.0, 0.5),
        SceneTarget::scenery(camera.position + camera.forward() * 12.0, 3.0),
    ]);

    let mut registry = RigRegistry::new();
    let mut device = LoggingDeviceBridge::new();
    let mut interaction = RecordingBridge::new();
    let mut sim = Simulator::new(config);
    sim.activate(&mut registry, &mut device, &DeviceSnapshot::new());

    println!("Session: {ticks} ticks at dt={dt}");
    let report_every = (ticks / 4).max(1);
    for tick in 0..ticks {
        let snapshot = scripted_snapshot(tick, ticks, &camera);
        sim.tick(dt, &snapshot, &camera, &scene, &mut interaction);
        if sim.tick_count() % report_every == 0 {
            println!("{}", RigInspector::summary(&sim));
        }
    }

    println!("{}", RigInspector::summary(&sim));
    for side in [HandSide::Left, HandSide::Right] {
        println!("{}", RigInspector::inspect_hand(&sim, side));
    }
    println!(
        "Interaction: {} touches, {} grab attempts",
        interaction.touches().len(),
        interaction.grab_attempts().len()
    );

    sim.deactivate(&mut registry);
    Ok(())
}

/// Input script: first third walks forward, the middle tick switches
/// hands, and the final tick fires a right-hand pickup.
fn scripted_snapshot(tick: u64, total: u64, camera: &ViewCamera) -> DeviceSnapshot {
    let mut snapshot = DeviceSnapshot::new().with_pointer(camera.viewport * 0.5);
    if tick < total / 3 {
        snapshot.press(Key::KeyW);
    }
    if tick == total / 2 {
        snapshot.press(Key::Tab);
    }
    if total > 0 && tick == total - 1 {
        snapshot.press(Key::LeftControl);
        snapshot.press(Key::MouseRight);
    }
    snapshot
}
