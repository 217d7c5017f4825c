//! Headless sandbox session: a scripted stand-in for the windowed UI.
//!
//! Demonstrates:
//! 1. Spawning a world with the default 150×155 configuration
//! 2. Feeding device events through the input translator
//! 3. Painting heat, fencing it with glass, and switching views
//! 4. Reading published frames and shutting down cleanly
//!
//! Run with: cargo run --example sandbox

use std::thread;
use std::time::Duration;

use hearth_core::Command;
use hearth_engine::{Button, InputEvent, InputTranslator, Key, SandboxWorld, WorldConfig};

// ─── Session parameters ──────────────────────────────────────────────

/// Window coordinates of the heat source (grid center plus margins).
const HOT_SPOT: (i32, i32) = (90, 92);

/// Right-drag corners of the glass fence, in window coordinates.
const FENCE_FROM: (i32, i32) = (50, 50);
const FENCE_TO: (i32, i32) = (130, 130);

fn main() {
    let config = WorldConfig {
        tick_rate_hz: Some(240.0),
        ..Default::default()
    };
    let mut world = SandboxWorld::new(config).expect("default config is valid");
    let mut translator = InputTranslator::new();

    // ─── Fence a region with glass ───────────────────────────────────

    // Space toggles into material view, key 2 selects glass, and a
    // right-drag fills the rectangle with it.
    let events = [
        InputEvent::KeyPressed(Key::Space),
        InputEvent::KeyPressed(Key::Digit2),
        InputEvent::PointerDown {
            button: Button::Right,
            x: FENCE_FROM.0,
            y: FENCE_FROM.1,
        },
        InputEvent::PointerUp {
            button: Button::Right,
            x: FENCE_TO.0,
            y: FENCE_TO.1,
        },
        // Back to temperature view for painting heat.
        InputEvent::KeyPressed(Key::Space),
    ];
    submit_events(&world, &mut translator, &events);

    // ─── Paint a heat source ─────────────────────────────────────────

    // A short left-drag across the center: down paints, each motion
    // paints again, up stops the stroke.
    let stroke = [
        InputEvent::PointerDown {
            button: Button::Left,
            x: HOT_SPOT.0,
            y: HOT_SPOT.1,
        },
        InputEvent::PointerMoved {
            x: HOT_SPOT.0 + 2,
            y: HOT_SPOT.1,
        },
        InputEvent::PointerMoved {
            x: HOT_SPOT.0 + 4,
            y: HOT_SPOT.1,
        },
        InputEvent::PointerUp {
            button: Button::Left,
            x: HOT_SPOT.0 + 4,
            y: HOT_SPOT.1,
        },
    ];
    submit_events(&world, &mut translator, &stroke);

    // ─── Watch the diffusion run ─────────────────────────────────────

    for _ in 0..5 {
        thread::sleep(Duration::from_millis(100));
        let frame = world.latest_frame();
        let hot_texels = frame
            .pixels
            .chunks_exact(4)
            .filter(|texel| texel[0] > 0)
            .count();
        println!(
            "tick {:>4} ({:?} view): {} texels above ambient",
            frame.tick.0, frame.view, hot_texels
        );
    }

    // ─── Shut down and inspect the final grid ────────────────────────

    let report = world.shutdown();
    println!(
        "shut down after {} ticks (joined: {})",
        report.ticks_completed, report.joined
    );

    if let Some(engine) = world.take_engine() {
        println!("total energy in the grid: {:.3}", engine.grid().total_energy());
    }
}

/// Translate and submit a batch of device events.
fn submit_events(world: &SandboxWorld, translator: &mut InputTranslator, events: &[InputEvent]) {
    let commands: Vec<Command> = events
        .iter()
        .filter_map(|&event| translator.translate(event))
        .collect();
    for command in commands {
        world.submit(command).expect("world is running");
    }
}
