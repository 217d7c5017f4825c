//! Integration test: world lifecycle, queue back-pressure, and the
//! paint-then-diffuse scenario through the public handle.
//!
//! Drives a real tick thread: commands go in through the bounded queue,
//! frames come out of the latest-wins slot, and shutdown recovers the
//! engine for final-state assertions.

use std::time::{Duration, Instant};

use hearth_core::{Command, FillValue, Material, SubmitError, ViewMode, ViewTarget};
use hearth_engine::{Frame, SandboxWorld, WorldConfig};
use hearth_sim::Brush;

fn fast_config() -> WorldConfig {
    WorldConfig {
        grid_width: 20,
        grid_height: 20,
        brush_radii: vec![1],
        tick_rate_hz: Some(2000.0),
        ..Default::default()
    }
}

/// Poll published frames until `pred` holds, panicking after 5 s.
///
/// Waiting on an observable frame effect (rather than a tick count)
/// guarantees the triggering command was drained before the test moves
/// on to shutdown.
fn wait_for_frame(world: &SandboxWorld, what: &str, pred: impl Fn(&Frame) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !pred(&world.latest_frame()) {
        assert!(Instant::now() < deadline, "never observed: {what}");
        std::thread::sleep(Duration::from_millis(1));
    }
}

fn any_red(frame: &Frame) -> bool {
    frame.pixels.chunks_exact(4).any(|t| t[0] > 0)
}

#[test]
fn painted_energy_survives_and_spreads() {
    let mut world = SandboxWorld::new(fast_config()).unwrap();

    // Window (25, 25) → grid (10, 10) under the default margins.
    world.submit(Command::PaintPoint { x: 25, y: 25 }).unwrap();
    wait_for_frame(&world, "painted heat in the red channel", any_red);

    world.shutdown();
    let engine = world.take_engine().unwrap();
    let grid = engine.grid();

    // Every stamped cell received the default paint energy; diffusion
    // conserves the total.
    let stamp_cells = Brush::from_radii(&fast_config().brush_radii).len() as f64;
    let expected = stamp_cells * WorldConfig::default().paint_energy as f64;
    assert!(
        (grid.total_energy() - expected).abs() < 1e-2,
        "total {} vs painted {expected}",
        grid.total_energy()
    );
    // Energy spread beyond the stamped plus-shape.
    assert!(grid.cell(8, 10).unwrap().energy > 0.0);
}

#[test]
fn frames_publish_in_the_current_view() {
    let mut world = SandboxWorld::new(fast_config()).unwrap();
    wait_for_frame(&world, "first frame", |f| f.tick.0 >= 1);
    assert_eq!(world.latest_frame().view, ViewMode::Temperature);

    world
        .submit(Command::SwitchView(ViewTarget::Material))
        .unwrap();
    wait_for_frame(&world, "material view frame", |f| {
        f.view == ViewMode::Material
    });

    world.shutdown();
}

#[test]
fn try_submit_reports_queue_full() {
    // Capacity 2 and a slow tick rate: the queue saturates before the
    // first drain.
    let config = WorldConfig {
        queue_capacity: 2,
        tick_rate_hz: Some(2.0),
        ..fast_config()
    };
    let mut world = SandboxWorld::new(config).unwrap();

    let cmd = Command::SelectMaterial(Material::Glass);
    let mut saw_full = false;
    for _ in 0..50 {
        if world.try_submit(cmd) == Err(SubmitError::QueueFull) {
            saw_full = true;
            break;
        }
    }
    assert!(saw_full, "bounded queue never reported saturation");

    world.shutdown();
}

#[test]
fn shutdown_finishes_current_tick_and_recovers_engine() {
    let mut world = SandboxWorld::new(fast_config()).unwrap();
    world
        .submit(Command::FillRect {
            x1: 16,
            y1: 16,
            x2: 33,
            y2: 33,
            value: FillValue::Energy(50.0),
        })
        .unwrap();
    wait_for_frame(&world, "filled heat in the red channel", any_red);

    let report = world.shutdown();
    assert!(report.joined);
    assert!(report.ticks_completed >= 1);
    assert!(!world.is_running());

    // The recovered engine holds the final grid state.
    let engine = world.take_engine().unwrap();
    assert!(engine.grid().total_energy() > 0.0);
    assert_eq!(engine.tick_id().0, report.ticks_completed);
}

#[test]
fn every_command_enqueued_before_shutdown_is_applied() {
    let mut world = SandboxWorld::new(fast_config()).unwrap();

    // One FIFO batch: select, switch view, then paint in that view.
    world
        .submit(Command::SelectMaterial(Material::Water))
        .unwrap();
    world
        .submit(Command::SwitchView(ViewTarget::Material))
        .unwrap();
    world.submit(Command::PaintPoint { x: 25, y: 25 }).unwrap();
    wait_for_frame(&world, "material view frame", |f| {
        f.view == ViewMode::Material
    });

    world.shutdown();
    let engine = world.take_engine().unwrap();
    assert_eq!(engine.state().view, ViewMode::Material);
    assert_eq!(engine.state().selected, Material::Water);
    assert_eq!(
        engine.grid().cell(10, 10).unwrap().material,
        Material::Water
    );
}
