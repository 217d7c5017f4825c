//! Mutation commands, view modes, and the command-application outcome.
//!
//! Commands are produced by the input collaborator, carried through the
//! bounded mutation queue, and consumed exactly once, in FIFO order, by
//! the tick loop. They are immutable once enqueued.

use crate::material::Material;

/// A discrete edit applied to the grid between diffusion steps.
///
/// Point and rectangle coordinates are window coordinates; the
/// application step subtracts the configured margins to map them into
/// grid space. Commands whose coordinates land outside the grid are
/// silently ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Stamp the brush at a window position.
    ///
    /// In temperature view each covered cell gains the configured energy
    /// quantum; in material view each covered cell takes the currently
    /// selected material.
    PaintPoint {
        /// Window x coordinate of the stamp center.
        x: i32,
        /// Window y coordinate of the stamp center.
        y: i32,
    },
    /// Fill an inclusive rectangle with a value.
    ///
    /// The corners may arrive in any order; application normalizes them.
    /// If either corner maps outside the grid the whole command is a
    /// no-op, never a partial fill.
    FillRect {
        /// Window x of the first corner.
        x1: i32,
        /// Window y of the first corner.
        y1: i32,
        /// Window x of the second corner.
        x2: i32,
        /// Window y of the second corner.
        y2: i32,
        /// What to write into every covered cell.
        value: FillValue,
    },
    /// Change the material used by subsequent paints and default fills.
    SelectMaterial(Material),
    /// Change which derived field is rendered.
    SwitchView(ViewTarget),
}

/// What a [`Command::FillRect`] writes into each covered cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillValue {
    /// Set the cell material.
    Material(Material),
    /// Set the stored energy.
    Energy(f32),
    /// View-mode-dependent default: reset energy to the baseline in
    /// temperature view, paint the selected material in material view.
    Default,
}

/// Target of a [`Command::SwitchView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewTarget {
    /// Switch to temperature view.
    Temperature,
    /// Switch to material view.
    Material,
    /// Flip between the two views.
    Toggle,
}

/// Which derived field the render step draws.
///
/// Controls only rendering and the defaults of paint/fill commands;
/// diffusion runs in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Render derived temperatures.
    #[default]
    Temperature,
    /// Render material tags.
    Material,
}

impl ViewMode {
    /// The other view mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Temperature => ViewMode::Material,
            ViewMode::Material => ViewMode::Temperature,
        }
    }
}

/// Result of applying one command to the grid.
///
/// Command application never fails; this outcome is a descriptive,
/// non-fatal signal used for diagnostics and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The command mutated the grid or editor state.
    Applied,
    /// Coordinates fell outside the grid after the margin transform.
    OutOfBounds,
    /// A paint center was within the brush radius of a grid edge; the
    /// whole stroke was rejected rather than clipped.
    NearEdge,
    /// The view mode changed; the render target must be cleared to the
    /// neutral background before the next publish.
    ViewChanged,
    /// The command requested the state it already described.
    NoChange,
}
