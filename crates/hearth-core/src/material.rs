//! The closed material set and the precomputed thermal lookup table.
//!
//! Materials are plain enum values; pairwise conductivity lives in an
//! explicit symmetric `N×N` matrix indexed by two discriminants. The
//! table is built once at startup and never mutated afterwards, so the
//! diffusion kernel can read flux coefficients without any further
//! scaling or bounds logic.

use std::fmt;

/// A material a grid cell can be made of.
///
/// The set is closed: all pairwise conductivities are precomputed in
/// [`MaterialTable`], and adding a variant only requires extending
/// [`Material::ALL`] and [`Material::properties`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    /// Aluminium: high conductivity, moderate heat capacity.
    #[default]
    Aluminium,
    /// Glass: low conductivity.
    Glass,
    /// Water: low conductivity, high heat capacity.
    Water,
}

/// Physical constants for one material.
///
/// Values are illustrative defaults, not certified data: heat
/// capacities are volumetric (J/(cm³·K)), conductivities are W/(m·K)
/// divided by 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProperties {
    /// Volumetric heat capacity (energy per unit temperature per cell).
    pub heat_capacity: f32,
    /// Thermal conductivity before prescaling.
    pub conductivity: f32,
}

impl Material {
    /// Number of materials in the closed set.
    pub const COUNT: usize = 3;

    /// All materials, in discriminant order.
    pub const ALL: [Material; Material::COUNT] =
        [Material::Aluminium, Material::Glass, Material::Water];

    /// Index of this material into table rows/columns.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The physical constants for this material.
    pub fn properties(self) -> MaterialProperties {
        match self {
            Material::Aluminium => MaterialProperties {
                heat_capacity: 2.422,
                conductivity: 205.0 / 100.0,
            },
            Material::Glass => MaterialProperties {
                heat_capacity: 2.1,
                conductivity: 0.8 / 100.0,
            },
            Material::Water => MaterialProperties {
                heat_capacity: 4.179,
                conductivity: 0.6 / 100.0,
            },
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Material::Aluminium => "aluminium",
            Material::Glass => "glass",
            Material::Water => "water",
        };
        write!(f, "{name}")
    }
}

/// Immutable lookup table of per-material and pairwise thermal constants.
///
/// Built once by [`MaterialTable::new`] before any mutation or diffusion
/// runs. Conductivities are prescaled by the element side-length and the
/// simulation time-step, so diffusion uses entries directly as flux
/// coefficients; heat-capacity reciprocals are precomputed so deriving a
/// temperature is a single multiply.
#[derive(Clone, Debug)]
pub struct MaterialTable {
    heat_capacity: [f32; Material::COUNT],
    inv_heat_capacity: [f32; Material::COUNT],
    conductivity: [[f32; Material::COUNT]; Material::COUNT],
}

impl MaterialTable {
    /// Build the table, prescaling every conductivity entry by
    /// `element_size * dt`.
    ///
    /// The diagonal holds each material's own conductivity; the
    /// off-diagonal entry for a heterogeneous pair is the arithmetic mean
    /// of the two diagonals, filled symmetrically. Infallible.
    pub fn new(element_size: f32, dt: f32) -> Self {
        let mut heat_capacity = [0.0; Material::COUNT];
        let mut inv_heat_capacity = [0.0; Material::COUNT];
        let mut conductivity = [[0.0; Material::COUNT]; Material::COUNT];

        for m in Material::ALL {
            let props = m.properties();
            let i = m.index();
            heat_capacity[i] = props.heat_capacity;
            inv_heat_capacity[i] = 1.0 / props.heat_capacity;
            conductivity[i][i] = props.conductivity;
        }

        for a in Material::ALL {
            for b in Material::ALL.into_iter().skip(a.index() + 1) {
                let mean = (conductivity[a.index()][a.index()]
                    + conductivity[b.index()][b.index()])
                    / 2.0;
                conductivity[a.index()][b.index()] = mean;
                conductivity[b.index()][a.index()] = mean;
            }
        }

        let scale = element_size * dt;
        for row in &mut conductivity {
            for entry in row.iter_mut() {
                *entry *= scale;
            }
        }

        Self {
            heat_capacity,
            inv_heat_capacity,
            conductivity,
        }
    }

    /// Volumetric heat capacity of a material.
    pub fn heat_capacity(&self, m: Material) -> f32 {
        self.heat_capacity[m.index()]
    }

    /// Precomputed reciprocal of the heat capacity.
    pub fn inv_heat_capacity(&self, m: Material) -> f32 {
        self.inv_heat_capacity[m.index()]
    }

    /// Prescaled flux coefficient between two (possibly equal) materials.
    pub fn conductivity(&self, a: Material, b: Material) -> f32 {
        self.conductivity[a.index()][b.index()]
    }
}
