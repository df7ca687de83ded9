//! Filler trait, shared interpolation and configuration-driven construction

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::algorithm::accelerated::AcceleratedFiller;
use crate::algorithm::exact::ExactFiller;
use crate::io::error::{Result, invalid_parameter};
use crate::math::weighting::{InverseDistance, WeightingFunction};
use crate::spatial::grid::{self, Grid};
use crate::spatial::{Connectivity, Coordinate};

/// Summary of a single filler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Number of hole pixels written
    pub hole_pixels: usize,
    /// Number of boundary pixels found around the hole
    pub boundary_pixels: usize,
    /// Number of values each hole pixel was interpolated from
    pub sources: usize,
    /// Number of written pixels whose value is not finite
    pub non_finite: usize,
}

impl FillReport {
    /// Whether the invocation found no hole
    pub const fn is_empty(&self) -> bool {
        self.hole_pixels == 0
    }
}

/// An algorithm that replaces the sentinel cells of one hole in place
pub trait HoleFiller {
    /// Fill the first hole found in row-major scan order
    ///
    /// A grid without sentinel cells is left untouched. An empty boundary is
    /// not an error: the affected cells receive non-finite values, counted in
    /// the returned report.
    fn fill(&self, grid: &mut Grid) -> FillReport;
}

/// Inverse-distance weighted average of `sources` as seen from `target`
///
/// Sums accumulate in `f64`. With no sources the quotient is `0 / 0`, which
/// yields NaN and is passed through unchanged.
pub fn weighted_average<W, I>(weighting: &W, target: Coordinate, sources: I) -> f32
where
    W: WeightingFunction + ?Sized,
    I: IntoIterator<Item = (Coordinate, f32)>,
{
    let (numerator, denominator) = sources.into_iter().fold(
        (0.0_f64, 0.0_f64),
        |(numerator, denominator), (source, value)| {
            let weight = f64::from(weighting.weight(target, source));
            (
                weight.mul_add(f64::from(value), numerator),
                denominator + weight,
            )
        },
    );
    (numerator / denominator) as f32
}

/// Write an interpolated value into every hole cell
///
/// `sources` is a snapshot of `(coordinate, intensity)` pairs taken before any
/// hole cell is written, so the result does not depend on visiting order.
pub(crate) fn interpolate_hole<W>(
    grid: &mut Grid,
    hole: &BTreeSet<Coordinate>,
    weighting: &W,
    sources: &[(Coordinate, f32)],
) -> usize
where
    W: WeightingFunction + ?Sized,
{
    let mut non_finite = 0;
    for &coord in hole {
        let value = weighted_average(weighting, coord, sources.iter().copied());
        if !value.is_finite() {
            non_finite += 1;
        }
        grid::set_cell(grid, coord, value);
    }

    if non_finite > 0 {
        warn!("{non_finite} hole pixels received non-finite values");
    }
    non_finite
}

/// Read the current intensities of `coords`, skipping cells outside the grid
pub(crate) fn snapshot_values(
    grid: &Grid,
    coords: &BTreeSet<Coordinate>,
) -> Vec<(Coordinate, f32)> {
    coords
        .iter()
        .filter_map(|&coord| grid::cell(grid, coord).map(|value| (coord, value)))
        .collect()
}

/// Runtime configuration selecting and parameterizing a filler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerConfig {
    /// Connectivity used to detect the boundary
    pub connectivity: Connectivity,
    /// Decay exponent of the default weighting
    pub z_factor: i32,
    /// Stabilizing constant of the default weighting
    pub epsilon: f32,
    /// Section count; `None` selects the exact filler
    pub sections: Option<usize>,
}

impl FillerConfig {
    /// Check every parameter before any filling starts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `z_factor` is not positive
    /// - `epsilon` is not a finite positive number
    /// - `sections` is `Some(0)`
    pub fn validate(&self) -> Result<()> {
        self.weighting()?;
        if self.sections == Some(0) {
            return Err(invalid_parameter(
                "sections",
                &0,
                &"section count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build the default weighting law from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `z_factor` or `epsilon` is out of range
    pub fn weighting(&self) -> Result<InverseDistance> {
        InverseDistance::new(self.z_factor, self.epsilon)
    }
}

/// Construct the filler described by `config`
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn build_filler(config: &FillerConfig) -> Result<Box<dyn HoleFiller>> {
    config.validate()?;
    let weighting = config.weighting()?;
    let filler: Box<dyn HoleFiller> = match config.sections {
        None => Box::new(ExactFiller::new(weighting, config.connectivity)),
        Some(sections) => Box::new(AcceleratedFiller::new(
            weighting,
            config.connectivity,
            sections,
        )?),
    };
    Ok(filler)
}

/// Fill holes one at a time until no sentinel cell remains
///
/// Each pass fills one connected hole, so every pass removes at least one
/// sentinel cell. The pass count is capped at the number of cells.
pub fn fill_all_holes<F>(filler: &F, grid: &mut Grid) -> Vec<FillReport>
where
    F: HoleFiller + ?Sized,
{
    let mut reports = Vec::new();
    for _ in 0..grid.len() {
        let report = filler.fill(grid);
        if report.is_empty() {
            break;
        }
        reports.push(report);
    }
    debug!(
        "filled {} holes, {} sentinel cells remain",
        reports.len(),
        grid::count_holes(grid)
    );
    reports
}
