//! Grid access with sentinel handling and flood-fill bookkeeping
//!
//! The grid is an `Array2<f32>` indexed `[row, col]`, i.e. `[y, x]`. Cells hold
//! normalized intensities in `[0, 1]` or the hole sentinel. All access through
//! a `Coordinate` is bounds-checked so neighbor enumeration can run unguarded.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::spatial::coordinate::Coordinate;

/// Single-channel image of normalized intensities
pub type Grid = Array2<f32>;

/// Value marking a cell as unknown; matched by exact equality only
pub const HOLE_SENTINEL: f32 = -1.0;

/// Convert a coordinate to `[row, col]` indices when it lies inside the grid
pub fn grid_index(grid: &Grid, coord: Coordinate) -> Option<[usize; 2]> {
    let row = usize::try_from(coord.y).ok()?;
    let col = usize::try_from(coord.x).ok()?;
    let (rows, cols) = grid.dim();
    (row < rows && col < cols).then_some([row, col])
}

/// Read a cell, `None` outside the grid
pub fn cell(grid: &Grid, coord: Coordinate) -> Option<f32> {
    grid_index(grid, coord).and_then(|index| grid.get(index).copied())
}

/// Write a cell, returning whether the coordinate was inside the grid
pub fn set_cell(grid: &mut Grid, coord: Coordinate, value: f32) -> bool {
    let Some(slot) = grid_index(grid, coord).and_then(|index| grid.get_mut(index)) else {
        return false;
    };
    *slot = value;
    true
}

/// Test a raw cell value against the sentinel
// Sentinel matching is exact by contract; a tolerance would swallow real intensities
#[allow(clippy::float_cmp)]
pub const fn is_sentinel(value: f32) -> bool {
    value == HOLE_SENTINEL
}

/// Test whether the cell at `coord` is part of a hole
///
/// Coordinates outside the grid are never holes.
pub fn is_hole(grid: &Grid, coord: Coordinate) -> bool {
    cell(grid, coord).is_some_and(is_sentinel)
}

/// Test whether the cell at `coord` is inside the grid and carries a known value
pub fn is_known(grid: &Grid, coord: Coordinate) -> bool {
    cell(grid, coord).is_some_and(|value| !is_sentinel(value))
}

/// Count sentinel cells in the grid
pub fn count_holes(grid: &Grid) -> usize {
    grid.iter().filter(|&&value| is_sentinel(value)).count()
}

/// Visited bitmap over the cells of a grid
///
/// Used by the iterative flood fills. Coordinates outside the grid are
/// reported as visited so traversals never step onto them.
#[derive(Clone, Debug)]
pub struct CellMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CellMask {
    /// Create an empty mask sized to the grid
    pub fn for_grid(grid: &Grid) -> Self {
        let (rows, cols) = grid.dim();
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    fn bit_index(&self, coord: Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.y).ok()?;
        let col = usize::try_from(coord.x).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Mark a coordinate, returning `true` if it was not marked before
    ///
    /// Out-of-grid coordinates are never inserted.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Some(index) = self.bit_index(coord) else {
            return false;
        };
        let was_set = self.bits.replace(index, true);
        !was_set
    }

    /// Test whether a coordinate is marked (out-of-grid counts as marked)
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.bit_index(coord)
            .is_none_or(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
