//! Tick loop and command channel draining.
//!
//! The tick thread owns [`TickEngine`] exclusively (moved in via
//! `thread::spawn`). No locks on the hot path — commands arrive via a
//! bounded crossbeam channel and the rendered frame goes out through
//! the latest-wins [`FrameSlot`](crate::frame::FrameSlot).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

use hearth_core::Command;

use crate::frame::FrameSlot;
use crate::tick::TickEngine;

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    engine: TickEngine,
    slot: Arc<FrameSlot>,
    cmd_rx: Receiver<Command>,
    shutdown_flag: Arc<AtomicBool>,
    tick_stopped: Arc<AtomicBool>,
    tick_budget: Duration,
}

impl TickThreadState {
    pub fn new(
        engine: TickEngine,
        slot: Arc<FrameSlot>,
        cmd_rx: Receiver<Command>,
        shutdown_flag: Arc<AtomicBool>,
        tick_stopped: Arc<AtomicBool>,
        tick_rate_hz: f64,
    ) -> Self {
        Self {
            engine,
            slot,
            cmd_rx,
            shutdown_flag,
            tick_stopped,
            tick_budget: Duration::from_secs_f64(1.0 / tick_rate_hz),
        }
    }

    /// Main tick loop. Runs until `shutdown_flag` is set.
    ///
    /// Each iteration performs the full tick sequence — drain, diffuse,
    /// publish — before re-checking the flag, so shutdown never cuts a
    /// tick short. Consumes self and returns the `TickEngine` so the
    /// world handle can recover it via `JoinHandle<TickEngine>`.
    pub fn run(mut self) -> TickEngine {
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                break;
            }

            let tick_start = Instant::now();

            // 1. Drain every command enqueued before this tick.
            self.drain_command_channel();

            // 2. Diffuse and render.
            let frame = self.engine.execute_tick().clone();

            // 3. Hand off to the rendering collaborator.
            self.slot.publish(frame);

            // 4. Sleep out the remaining budget.
            let elapsed = tick_start.elapsed();
            if let Some(remaining) = self.tick_budget.checked_sub(elapsed) {
                std::thread::sleep(remaining);
            }
        }

        log::debug!("tick thread stopping after {} ticks", self.engine.tick_id());
        self.tick_stopped.store(true, Ordering::Release);
        self.engine
    }

    /// Apply all immediately available commands, in FIFO order.
    ///
    /// Non-blocking: commands enqueued while the subsequent diffusion
    /// step runs wait for the next tick.
    fn drain_command_channel(&mut self) {
        while let Ok(command) = self.cmd_rx.try_recv() {
            self.engine.apply_command(&command);
        }
    }
}
