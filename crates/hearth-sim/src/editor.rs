//! Command application: mapping queued edits onto the grid.
//!
//! [`apply`] is a pure function of `(state, command, grid)` — the view
//! mode and selected material travel in an explicit [`EditorState`]
//! rather than ambient globals, so the tick loop's behavior is easy to
//! test in isolation.

use hearth_core::{ApplyOutcome, Command, FillValue, Material, ViewMode, ViewTarget};

use crate::brush::Brush;
use crate::grid::Grid;

/// Editor state threaded through command application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Material used by paints and default fills in material view.
    pub selected: Material,
    /// Which derived field the render step draws.
    pub view: ViewMode,
}

/// Constants that shape command application, fixed at world creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditParams {
    /// Horizontal margin subtracted from window x coordinates.
    pub margin_west: i32,
    /// Vertical margin subtracted from window y coordinates.
    pub margin_north: i32,
    /// Energy added to each covered cell per paint stroke.
    pub paint_energy: f32,
    /// Baseline energy a default fill resets to in temperature view.
    pub baseline_energy: f32,
}

/// Map window coordinates into grid space.
///
/// Returns `None` if the transformed point is outside the grid.
pub fn to_grid(grid: &Grid, params: &EditParams, x: i32, y: i32) -> Option<(i32, i32)> {
    let gx = x - params.margin_west;
    let gy = y - params.margin_north;
    grid.in_bounds(gx, gy).then_some((gx, gy))
}

/// Apply one mutation command to the grid and editor state.
///
/// Never fails; out-of-bounds and near-edge commands degrade to no-ops
/// with a descriptive [`ApplyOutcome`]. A [`ApplyOutcome::ViewChanged`]
/// result obliges the caller to clear its render target to the neutral
/// background before the next publish.
pub fn apply(
    grid: &mut Grid,
    brush: &Brush,
    state: &mut EditorState,
    params: &EditParams,
    command: &Command,
) -> ApplyOutcome {
    match *command {
        Command::PaintPoint { x, y } => paint_point(grid, brush, state, params, x, y),
        Command::FillRect {
            x1,
            y1,
            x2,
            y2,
            value,
        } => fill_rect(grid, state, params, (x1, y1), (x2, y2), value),
        Command::SelectMaterial(material) => {
            state.selected = material;
            ApplyOutcome::Applied
        }
        Command::SwitchView(target) => switch_view(state, target),
    }
}

fn paint_point(
    grid: &mut Grid,
    brush: &Brush,
    state: &EditorState,
    params: &EditParams,
    x: i32,
    y: i32,
) -> ApplyOutcome {
    let Some((gx, gy)) = to_grid(grid, params, x, y) else {
        return ApplyOutcome::OutOfBounds;
    };

    // Whole-stroke rejection near the boundary: a partial, asymmetric
    // stamp is worse than no stamp.
    let min_dist = gx
        .min(gy)
        .min(grid.width() as i32 - gx)
        .min(grid.height() as i32 - gy);
    if brush.max_radius() as i32 >= min_dist {
        return ApplyOutcome::NearEdge;
    }

    match state.view {
        ViewMode::Temperature => {
            for &(dx, dy) in brush.offsets() {
                grid.add_energy(gx + dx, gy + dy, params.paint_energy);
            }
        }
        ViewMode::Material => {
            for &(dx, dy) in brush.offsets() {
                grid.set_material(gx + dx, gy + dy, state.selected);
            }
        }
    }
    ApplyOutcome::Applied
}

fn fill_rect(
    grid: &mut Grid,
    state: &EditorState,
    params: &EditParams,
    corner1: (i32, i32),
    corner2: (i32, i32),
    value: FillValue,
) -> ApplyOutcome {
    // Either corner outside the grid rejects the whole command; a fill
    // is never partially clipped.
    let Some((x1, y1)) = to_grid(grid, params, corner1.0, corner1.1) else {
        return ApplyOutcome::OutOfBounds;
    };
    let Some((x2, y2)) = to_grid(grid, params, corner2.0, corner2.1) else {
        return ApplyOutcome::OutOfBounds;
    };

    let (x_lo, x_hi) = (x1.min(x2), x1.max(x2));
    let (y_lo, y_hi) = (y1.min(y2), y1.max(y2));

    let resolved = match value {
        FillValue::Default => match state.view {
            ViewMode::Temperature => FillValue::Energy(params.baseline_energy),
            ViewMode::Material => FillValue::Material(state.selected),
        },
        other => other,
    };

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            match resolved {
                FillValue::Material(m) => grid.set_material(x, y, m),
                FillValue::Energy(e) => grid.set_energy(x, y, e),
                FillValue::Default => unreachable!("resolved above"),
            }
        }
    }
    ApplyOutcome::Applied
}

fn switch_view(state: &mut EditorState, target: ViewTarget) -> ApplyOutcome {
    let requested = match target {
        ViewTarget::Temperature => ViewMode::Temperature,
        ViewTarget::Material => ViewMode::Material,
        ViewTarget::Toggle => state.view.toggled(),
    };
    if requested == state.view {
        return ApplyOutcome::NoChange;
    }
    state.view = requested;
    ApplyOutcome::ViewChanged
}
