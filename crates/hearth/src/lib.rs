//! Hearth: an interactive 2D heat-diffusion sandbox core.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Hearth sub-crates. For most users, adding `hearth` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hearth::prelude::*;
//!
//! // Spawn a small world ticking at 500 Hz.
//! let config = WorldConfig {
//!     grid_width: 32,
//!     grid_height: 32,
//!     brush_radii: vec![2],
//!     tick_rate_hz: Some(500.0),
//!     ..Default::default()
//! };
//! let mut world = SandboxWorld::new(config).unwrap();
//!
//! // Paint a heat source at the grid center (window coordinates
//! // include the 15-pixel margins).
//! world.submit(Command::PaintPoint { x: 31, y: 31 }).unwrap();
//!
//! // Let a few ticks run, then shut down and inspect the result.
//! std::thread::sleep(std::time::Duration::from_millis(20));
//! let report = world.shutdown();
//! assert!(report.joined);
//! let engine = world.take_engine().unwrap();
//! assert!(engine.grid().total_energy() > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `hearth-core` | Materials, commands, view modes, errors |
//! | [`sim`] | `hearth-sim` | Grid, brush, diffusion kernel, editor |
//! | [`engine`] | `hearth-engine` | Config, tick engine, world handle, input |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use hearth_core as core;
pub use hearth_engine as engine;
pub use hearth_sim as sim;

/// Commonly used types, glob-importable.
pub mod prelude {
    pub use hearth_core::{
        ApplyOutcome, Command, ConfigError, FillValue, Material, MaterialTable, SubmitError,
        TickId, ViewMode, ViewTarget,
    };
    pub use hearth_engine::{
        Button, Frame, InputEvent, InputTranslator, Key, Margins, SandboxWorld, ShutdownReport,
        TickEngine, WorldConfig,
    };
    pub use hearth_sim::{Brush, EditParams, EditorState, Grid};
}
