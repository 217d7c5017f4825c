//! User-facing `SandboxWorld` handle and the shutdown sequence.
//!
//! The tick engine runs on a dedicated background thread; this handle
//! holds the producer side of the bounded mutation queue and the frame
//! slot. The queue is the only shared mutable structure between the
//! input flow and the simulation flow.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use hearth_core::{Command, ConfigError, SubmitError};

use crate::config::WorldConfig;
use crate::frame::{Frame, FrameSlot};
use crate::tick::TickEngine;
use crate::tick_thread::TickThreadState;

/// Report from the coordinated shutdown sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Ticks the engine completed before stopping.
    pub ticks_completed: u64,
    /// Whether the tick thread was joined cleanly.
    pub joined: bool,
}

/// An interactive heat-diffusion sandbox running on a background tick
/// thread.
///
/// Exactly one producer (the input collaborator, through this handle)
/// and one consumer (the tick thread) share the bounded command queue.
/// Dropping the handle performs the same wait-for-completion shutdown
/// as [`shutdown()`](SandboxWorld::shutdown): the tick thread finishes
/// its current drain → diffuse → publish sequence and exits before any
/// owned resource is released — never a hard kill.
#[derive(Debug)]
pub struct SandboxWorld {
    cmd_tx: Option<crossbeam_channel::Sender<Command>>,
    slot: Arc<FrameSlot>,
    shutdown_flag: Arc<AtomicBool>,
    tick_stopped: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<TickEngine>>,
    /// Recovered from the tick thread on shutdown, for inspection.
    recovered_engine: Option<TickEngine>,
}

impl SandboxWorld {
    /// Validate the configuration and spawn the tick thread.
    ///
    /// A [`ConfigError`] is returned before any thread exists, so the
    /// caller can abort startup cleanly.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let engine = TickEngine::new(&config)?;
        let tick_rate_hz = config.tick_rate_hz.unwrap_or(60.0);

        let slot = Arc::new(FrameSlot::new(engine.frame().clone()));
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let tick_stopped = Arc::new(AtomicBool::new(false));

        // The mutation queue: bounded, FIFO, drained at each tick start.
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(config.queue_capacity);

        let thread_slot = Arc::clone(&slot);
        let thread_shutdown = Arc::clone(&shutdown_flag);
        let thread_stopped = Arc::clone(&tick_stopped);
        let tick_thread = thread::Builder::new()
            .name("hearth-tick".into())
            .spawn(move || {
                let state = TickThreadState::new(
                    engine,
                    thread_slot,
                    cmd_rx,
                    thread_shutdown,
                    thread_stopped,
                    tick_rate_hz,
                );
                state.run()
            })
            .expect("failed to spawn tick thread");

        log::debug!("sandbox world started at {tick_rate_hz} Hz");

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            slot,
            shutdown_flag,
            tick_stopped,
            tick_thread: Some(tick_thread),
            recovered_engine: None,
        })
    }

    /// Enqueue a command, blocking while the queue is saturated.
    ///
    /// The command is applied at the start of the next tick that drains
    /// it; commands are never silently dropped.
    pub fn submit(&self, command: Command) -> Result<(), SubmitError> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        cmd_tx.send(command).map_err(|_| SubmitError::Shutdown)
    }

    /// Enqueue a command, failing fast on a saturated queue.
    pub fn try_submit(&self, command: Command) -> Result<(), SubmitError> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        cmd_tx.try_send(command).map_err(|e| match e {
            crossbeam_channel::TrySendError::Full(_) => SubmitError::QueueFull,
            crossbeam_channel::TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })
    }

    /// The most recently published frame, for the rendering
    /// collaborator. Never blocks the tick thread.
    pub fn latest_frame(&self) -> Arc<Frame> {
        self.slot.latest()
    }

    /// Whether the tick thread is still running.
    pub fn is_running(&self) -> bool {
        !self.tick_stopped.load(Ordering::Acquire)
    }

    /// Coordinated shutdown: close the queue, signal the tick thread,
    /// and join it after its current tick completes.
    ///
    /// Idempotent; repeated calls report zero ticks and `joined: false`.
    pub fn shutdown(&mut self) -> ShutdownReport {
        // Closing the producer side unblocks any pending `submit`.
        self.cmd_tx = None;
        self.shutdown_flag.store(true, Ordering::Release);

        let Some(handle) = self.tick_thread.take() else {
            return ShutdownReport {
                ticks_completed: 0,
                joined: false,
            };
        };

        match handle.join() {
            Ok(engine) => {
                let ticks = engine.tick_id().0;
                self.recovered_engine = Some(engine);
                ShutdownReport {
                    ticks_completed: ticks,
                    joined: true,
                }
            }
            Err(_) => ShutdownReport {
                ticks_completed: 0,
                joined: false,
            },
        }
    }

    /// Take the engine recovered by [`shutdown()`](SandboxWorld::shutdown),
    /// e.g. to inspect the final grid.
    pub fn take_engine(&mut self) -> Option<TickEngine> {
        self.recovered_engine.take()
    }
}

impl Drop for SandboxWorld {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            let report = self.shutdown();
            log::debug!(
                "sandbox world dropped after {} ticks",
                report.ticks_completed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> WorldConfig {
        WorldConfig {
            grid_width: 12,
            grid_height: 12,
            brush_radii: vec![1],
            tick_rate_hz: Some(2000.0),
            ..Default::default()
        }
    }

    #[test]
    fn new_rejects_invalid_config_before_spawning() {
        let config = WorldConfig {
            queue_capacity: 0,
            ..fast_config()
        };
        assert_eq!(
            SandboxWorld::new(config).unwrap_err(),
            ConfigError::ZeroQueueCapacity
        );
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut world = SandboxWorld::new(fast_config()).unwrap();
        let first = world.shutdown();
        assert!(first.joined);
        let second = world.shutdown();
        assert!(!second.joined);
        assert_eq!(second.ticks_completed, 0);
    }

    #[test]
    fn submit_after_shutdown_reports_shutdown() {
        let mut world = SandboxWorld::new(fast_config()).unwrap();
        world.shutdown();
        let result = world.submit(Command::PaintPoint { x: 0, y: 0 });
        assert_eq!(result, Err(SubmitError::Shutdown));
    }
}
