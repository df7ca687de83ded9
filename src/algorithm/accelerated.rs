//! Accelerated filler interpolating from clustered boundary representatives
//!
//! Caps interpolation cost at `O(|hole| * K)` by replacing the boundary with at
//! most `K` representatives, each carrying the mean of one boundary section.
//! When `K` reaches the boundary size every section holds a single pixel and
//! the result matches the exact filler up to rounding, provided the boundary
//! is 4-connected.

use log::debug;

use crate::algorithm::filler::{FillReport, HoleFiller, interpolate_hole};
use crate::algorithm::region::{find_boundary, find_hole};
use crate::algorithm::sections::{
    SectionCursor, order_boundary, partition_sections, section_means,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::weighting::WeightingFunction;
use crate::spatial::{Connectivity, Coordinate, Grid};

/// Interpolates each hole pixel from at most `sections` boundary representatives
#[derive(Debug, Clone)]
pub struct AcceleratedFiller<W> {
    weighting: W,
    connectivity: Connectivity,
    sections: usize,
}

impl<W: WeightingFunction> AcceleratedFiller<W> {
    /// Create a filler clustering the boundary into at most `sections` groups
    ///
    /// # Errors
    ///
    /// Returns an error if `sections` is zero
    pub fn new(weighting: W, connectivity: Connectivity, sections: usize) -> Result<Self> {
        if sections == 0 {
            return Err(invalid_parameter(
                "sections",
                &sections,
                &"section count must be at least 1",
            ));
        }
        Ok(Self {
            weighting,
            connectivity,
            sections,
        })
    }

    /// Target section count
    pub const fn sections(&self) -> usize {
        self.sections
    }

    /// Connectivity used for boundary detection
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Fill the first hole, partitioning the boundary from `cursor`
    ///
    /// Returns the report and the cursor where partitioning stopped, which can
    /// be passed to the next call to rotate section filling across calls.
    pub fn fill_with_cursor(
        &self,
        grid: &mut Grid,
        cursor: SectionCursor,
    ) -> (FillReport, SectionCursor) {
        let hole = find_hole(grid);
        if hole.is_empty() {
            return (FillReport::default(), cursor);
        }
        let boundary = find_boundary(grid, &hole, self.connectivity);

        let ordered = order_boundary(grid, &boundary);
        if ordered.len() < boundary.len() {
            debug!(
                "boundary is not 4-connected; clustering {} of {} pixels",
                ordered.len(),
                boundary.len()
            );
        }

        let (groups, next_cursor) =
            partition_sections(&ordered, boundary.len(), self.sections, cursor);
        let representatives: Vec<(Coordinate, f32)> =
            section_means(grid, &groups).into_iter().collect();
        debug!(
            "clustered {} boundary pixels into {} representatives",
            boundary.len(),
            representatives.len()
        );

        let non_finite = interpolate_hole(grid, &hole, &self.weighting, &representatives);

        let report = FillReport {
            hole_pixels: hole.len(),
            boundary_pixels: boundary.len(),
            sources: representatives.len(),
            non_finite,
        };
        (report, next_cursor)
    }
}

impl<W: WeightingFunction> HoleFiller for AcceleratedFiller<W> {
    fn fill(&self, grid: &mut Grid) -> FillReport {
        self.fill_with_cursor(grid, SectionCursor::default()).0
    }
}
