//! Engine orchestration for the Hearth heat-diffusion sandbox.
//!
//! Provides the tick engine and its background thread, the bounded
//! mutation queue between input and simulation, frame publication for
//! the rendering collaborator, and device-event translation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod frame;
pub mod input;
pub mod tick;
pub mod world;

mod tick_thread;

pub use config::{Margins, WorldConfig};
pub use frame::{Frame, FrameSlot, BACKGROUND_RGBA};
pub use input::{Button, InputEvent, InputTranslator, Key};
pub use tick::TickEngine;
pub use world::{SandboxWorld, ShutdownReport};
