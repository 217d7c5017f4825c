//! The per-tick diffusion kernel.
//!
//! A first-order explicit finite-difference stencil over the grid:
//! energy moves between adjacent cells proportionally to the prescaled
//! pair conductivity and the temperature gradient. The horizontal sweep
//! fully completes, mutating energies in place, before the vertical
//! sweep reads or writes — the sequential ordering is observable
//! behavior, not an implementation detail.
//!
//! All arithmetic is f32 and no stability clamp is applied; divergent
//! conductivity/dt combinations are a known non-goal.

use hearth_core::{DiffusionError, MaterialTable, SweepPass};

use crate::grid::Grid;

/// Advance the grid by one diffusion step.
///
/// For each adjacent pair, with `a` the east/south cell and `b` its
/// west/north neighbour:
/// `q = conductivity[mat_a][mat_b] * (temp_a - temp_b)`, then
/// `energy_a -= q; energy_b += q`. The exchange conserves energy
/// exactly, per sweep. Temperatures are derived on the fly from the
/// current energies via the precomputed heat-capacity reciprocals.
///
/// A NaN flux aborts the remainder of the step and reports the cell and
/// sweep where it was detected; cells already exchanged keep their new
/// energies. The caller logs the abort and continues on the next tick.
pub fn heat_flow(grid: &mut Grid, table: &MaterialTable) -> Result<(), DiffusionError> {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let (material, energy) = grid.split_flux_mut();

    for y in 0..height {
        let row = y * width;
        for x in 1..width {
            let a = row + x;
            let b = row + x - 1;
            let temp_a = energy[a] * table.inv_heat_capacity(material[a]);
            let temp_b = energy[b] * table.inv_heat_capacity(material[b]);
            let q = table.conductivity(material[a], material[b]) * (temp_a - temp_b);
            if q.is_nan() {
                return Err(DiffusionError::NanFlux {
                    x: x as i32,
                    y: y as i32,
                    pass: SweepPass::Horizontal,
                });
            }
            energy[a] -= q;
            energy[b] += q;
        }
    }

    for y in 1..height {
        for x in 0..width {
            let a = y * width + x;
            let b = (y - 1) * width + x;
            let temp_a = energy[a] * table.inv_heat_capacity(material[a]);
            let temp_b = energy[b] * table.inv_heat_capacity(material[b]);
            let q = table.conductivity(material[a], material[b]) * (temp_a - temp_b);
            if q.is_nan() {
                return Err(DiffusionError::NanFlux {
                    x: x as i32,
                    y: y as i32,
                    pass: SweepPass::Vertical,
                });
            }
            energy[a] -= q;
            energy[b] += q;
        }
    }

    Ok(())
}
