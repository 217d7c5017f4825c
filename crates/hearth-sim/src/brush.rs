//! Precomputed disc-shaped stamp for point painting.

/// An immutable set of `(dx, dy)` offsets approximating one or more
/// filled discs, reused for every paint stroke.
///
/// Offsets are generated per quadrant and reflected across both axes,
/// with the center counted once, then sorted and deduplicated — the
/// offset list is a set, so stamp application is idempotent under
/// permutation.
#[derive(Clone, Debug)]
pub struct Brush {
    offsets: Vec<(i32, i32)>,
    max_radius: u32,
}

impl Brush {
    /// Largest radius [`from_radii`](Brush::from_radii) accepts; larger
    /// requests are clamped to it.
    pub const MAX_RADIUS: u32 = 256;

    /// Build the union of filled discs for the requested radii.
    ///
    /// Each disc contains every integer offset with
    /// `dx² + dy² ≤ radius²`. An empty radius list yields an empty
    /// brush; configuration validation rejects that before it reaches
    /// the engine. Radii above [`Brush::MAX_RADIUS`] are clamped so the
    /// squared-distance arithmetic stays within `i32`.
    pub fn from_radii(radii: &[u32]) -> Self {
        let mut offsets: Vec<(i32, i32)> = Vec::new();
        let mut max_radius = 0u32;

        for &radius in radii {
            let radius = radius.min(Self::MAX_RADIUS);
            max_radius = max_radius.max(radius);
            let r = radius as i32;
            let squared = r * r;
            for dx in 0..=r {
                for dy in 0..=r {
                    if dx * dx + dy * dy > squared {
                        continue;
                    }
                    offsets.push((dx, dy));
                    if dy != 0 {
                        offsets.push((dx, -dy));
                    }
                    if dx != 0 {
                        offsets.push((-dx, dy));
                        if dy != 0 {
                            offsets.push((-dx, -dy));
                        }
                    }
                }
            }
        }

        offsets.sort_unstable();
        offsets.dedup();

        Self { offsets, max_radius }
    }

    /// The stamp offsets relative to the stroke center.
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// The largest requested radius.
    ///
    /// Strokes centered within this distance of a grid edge are
    /// rejected whole to avoid asymmetric partial stamps.
    pub fn max_radius(&self) -> u32 {
        self.max_radius
    }

    /// Number of cells the stamp covers.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the stamp covers no cells.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
