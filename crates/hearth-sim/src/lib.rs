//! Simulation state and algorithms for the Hearth heat-diffusion
//! sandbox: the cell grid, the disc brush, the diffusion kernel, and
//! command application against an explicit editor state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brush;
pub mod diffusion;
pub mod editor;
pub mod grid;

pub use brush::Brush;
pub use diffusion::heat_flow;
pub use editor::{apply, to_grid, EditParams, EditorState};
pub use grid::{Cell, Grid};
