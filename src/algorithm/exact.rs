//! Exact filler weighing every hole pixel against every boundary pixel

use log::debug;

use crate::algorithm::filler::{FillReport, HoleFiller, interpolate_hole, snapshot_values};
use crate::algorithm::region::{find_boundary, find_hole};
use crate::math::weighting::WeightingFunction;
use crate::spatial::{Connectivity, Grid};

/// Interpolates each hole pixel from the full boundary
///
/// Runs in `O(|hole| * |boundary|)`.
#[derive(Debug, Clone)]
pub struct ExactFiller<W> {
    weighting: W,
    connectivity: Connectivity,
}

impl<W: WeightingFunction> ExactFiller<W> {
    /// Create a filler detecting the boundary under `connectivity`
    pub const fn new(weighting: W, connectivity: Connectivity) -> Self {
        Self {
            weighting,
            connectivity,
        }
    }

    /// Connectivity used for boundary detection
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Weighting function used for interpolation
    pub const fn weighting(&self) -> &W {
        &self.weighting
    }
}

impl<W: WeightingFunction> HoleFiller for ExactFiller<W> {
    fn fill(&self, grid: &mut Grid) -> FillReport {
        let hole = find_hole(grid);
        if hole.is_empty() {
            return FillReport::default();
        }
        let boundary = find_boundary(grid, &hole, self.connectivity);
        let sources = snapshot_values(grid, &boundary);

        let non_finite = interpolate_hole(grid, &hole, &self.weighting, &sources);
        debug!(
            "exact fill wrote {} pixels from {} boundary pixels",
            hole.len(),
            sources.len()
        );

        FillReport {
            hole_pixels: hole.len(),
            boundary_pixels: boundary.len(),
            sources: sources.len(),
            non_finite,
        }
    }
}
