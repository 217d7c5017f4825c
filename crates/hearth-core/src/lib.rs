//! Core types for the Hearth heat-diffusion sandbox.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the material model and its precomputed lookup table, the mutation
//! command vocabulary, view modes, tick identifiers, and the error
//! enums shared by the simulation and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod material;

pub use command::{ApplyOutcome, Command, FillValue, ViewMode, ViewTarget};
pub use error::{ConfigError, DiffusionError, SubmitError, SweepPass};
pub use id::TickId;
pub use material::{Material, MaterialProperties, MaterialTable};
