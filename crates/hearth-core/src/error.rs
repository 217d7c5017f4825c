//! Error types, organized by subsystem: diffusion, ingress, and
//! configuration.
//!
//! Command application never produces an error (see
//! [`ApplyOutcome`](crate::command::ApplyOutcome)); everything here is
//! either recoverable by the tick loop or reported before the loop
//! starts.

use std::error::Error;
use std::fmt;

/// Which diffusion sweep was running when a condition was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepPass {
    /// The west–east sweep over horizontally adjacent cells.
    Horizontal,
    /// The north–south sweep over vertically adjacent cells.
    Vertical,
}

impl fmt::Display for SweepPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Errors from the diffusion kernel.
///
/// A NaN flux aborts the remainder of the current step; the tick loop
/// logs it and continues on the next tick. Never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffusionError {
    /// A flux computation produced NaN; the step stopped at this cell.
    NanFlux {
        /// Grid x of the cell whose flux was NaN.
        x: i32,
        /// Grid y of the cell whose flux was NaN.
        y: i32,
        /// The sweep that was running.
        pass: SweepPass,
    },
}

impl fmt::Display for DiffusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NanFlux { x, y, pass } => {
                write!(f, "NaN flux at ({x}, {y}) during {pass} sweep")
            }
        }
    }
}

impl Error for DiffusionError {}

/// Errors submitting a command to the tick thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The bounded command queue is at capacity (back-pressure).
    /// Recoverable: the caller may retry or block on `submit`.
    QueueFull,
    /// The tick thread has shut down.
    Shutdown,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "command queue full"),
            Self::Shutdown => write!(f, "tick thread has shut down"),
        }
    }
}

impl Error for SubmitError {}

/// Errors validating a world configuration.
///
/// Returned before the tick loop starts so the caller can abort startup.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid width or height is zero.
    EmptyGrid,
    /// No brush radii were requested.
    EmptyBrush,
    /// The brush diameter exceeds the smaller grid dimension, so every
    /// paint stroke would be rejected by the edge guard.
    BrushTooLarge {
        /// The largest requested radius.
        max_radius: u32,
    },
    /// The time-step is not finite and positive.
    InvalidDt {
        /// The rejected value.
        value: f32,
    },
    /// The tick rate is not finite and positive.
    InvalidTickRate {
        /// The rejected value.
        value: f64,
    },
    /// The mutation queue capacity is zero.
    ZeroQueueCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be non-zero"),
            Self::EmptyBrush => write!(f, "at least one brush radius is required"),
            Self::BrushTooLarge { max_radius } => {
                write!(f, "brush radius {max_radius} leaves no paintable cells")
            }
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "tick rate must be finite and positive, got {value}")
            }
            Self::ZeroQueueCapacity => write!(f, "queue capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_cell_and_pass() {
        let err = DiffusionError::NanFlux {
            x: 3,
            y: 7,
            pass: SweepPass::Vertical,
        };
        let msg = err.to_string();
        assert!(msg.contains("(3, 7)"));
        assert!(msg.contains("vertical"));
    }

    #[test]
    fn submit_errors_are_distinct() {
        assert_ne!(SubmitError::QueueFull, SubmitError::Shutdown);
        assert_eq!(SubmitError::QueueFull.to_string(), "command queue full");
    }
}
