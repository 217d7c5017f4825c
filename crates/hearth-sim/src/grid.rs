//! Fixed-size 2D cell grid with struct-of-arrays storage.
//!
//! Materials and energies live in flat row-major vectors so the
//! diffusion kernel walks contiguous memory; [`Cell`] is the public
//! per-position view. Temperature is derived, never stored.

use hearth_core::{Material, MaterialTable};

/// One grid position: a material tag and a stored energy value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// The material this cell is made of.
    pub material: Material,
    /// Stored energy. Temperature is `energy * inv_heat_capacity`.
    pub energy: f32,
}

/// A fixed-size 2D array of cells.
///
/// Dimensions are fixed at construction and cells are never destroyed;
/// the grid lives for the whole program run. All writes happen on the
/// simulation flow — queued edits via
/// [`editor::apply`](crate::editor::apply) and the diffusion step.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    material: Vec<Material>,
    energy: Vec<f32>,
}

impl Grid {
    /// Create a grid with every cell set to `default_material` and zero
    /// energy.
    pub fn new(width: u32, height: u32, default_material: Material) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            material: vec![default_material; cells],
            energy: vec![0.0; cells],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` is a valid cell coordinate.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The cell at `(x, y)`, or `None` out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x, y);
        Some(Cell {
            material: self.material[i],
            energy: self.energy[i],
        })
    }

    /// Derived temperature at `(x, y)`, or `None` out of bounds.
    pub fn temperature(&self, x: i32, y: i32, table: &MaterialTable) -> Option<f32> {
        self.cell(x, y)
            .map(|cell| cell.energy * table.inv_heat_capacity(cell.material))
    }

    /// Set the material of an in-bounds cell. Out-of-bounds is a no-op.
    pub fn set_material(&mut self, x: i32, y: i32, material: Material) {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.material[i] = material;
        }
    }

    /// Set the energy of an in-bounds cell. Out-of-bounds is a no-op.
    pub fn set_energy(&mut self, x: i32, y: i32, energy: f32) {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.energy[i] = energy;
        }
    }

    /// Add energy to an in-bounds cell. Out-of-bounds is a no-op.
    pub fn add_energy(&mut self, x: i32, y: i32, delta: f32) {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.energy[i] += delta;
        }
    }

    /// Sum of stored energy over the whole grid.
    pub fn total_energy(&self) -> f64 {
        self.energy.iter().map(|&e| f64::from(e)).sum()
    }

    /// Row-major material slice.
    pub fn materials(&self) -> &[Material] {
        &self.material
    }

    /// Row-major energy slice.
    pub fn energies(&self) -> &[f32] {
        &self.energy
    }

    /// Materials read-only, energies mutable — the diffusion kernel's
    /// access pattern.
    pub(crate) fn split_flux_mut(&mut self) -> (&[Material], &mut [f32]) {
        (&self.material, &mut self.energy)
    }
}
