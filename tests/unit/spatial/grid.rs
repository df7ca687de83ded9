//! Tests for sentinel-aware grid access and visited masks

#[cfg(test)]
mod tests {
    use holefill::spatial::grid::{
        CellMask, cell, count_holes, grid_index, is_hole, is_known, is_sentinel, set_cell,
    };
    use holefill::spatial::{Coordinate, HOLE_SENTINEL};
    use ndarray::{Array2, array};

    // Tests the sentinel is matched exactly, never within a tolerance
    #[test]
    fn test_sentinel_exact_match() {
        let grid = array![[HOLE_SENTINEL, -0.999_999, -1.000_001], [0.0, 1.0, 0.5]];
        assert!(is_hole(&grid, Coordinate::new(0, 0)));
        assert!(!is_hole(&grid, Coordinate::new(1, 0)));
        assert!(!is_hole(&grid, Coordinate::new(2, 0)));
        assert!(is_sentinel(-1.0));
        assert!(!is_sentinel(f32::NAN));
    }

    // Tests x maps to columns and y to rows
    #[test]
    fn test_coordinate_axes() {
        let grid = array![[0.0, 0.1, 0.2], [0.3, 0.4, 0.5]];
        assert_eq!(grid_index(&grid, Coordinate::new(2, 1)), Some([1, 2]));
        assert_eq!(cell(&grid, Coordinate::new(2, 0)), Some(0.2));
        assert_eq!(cell(&grid, Coordinate::new(0, 1)), Some(0.3));
    }

    // Tests coordinates outside the grid are neither holes nor known cells
    #[test]
    fn test_out_of_bounds_access() {
        let grid = Array2::from_elem((2, 2), HOLE_SENTINEL);
        for coord in [
            Coordinate::new(-1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(2, 0),
            Coordinate::new(0, 2),
        ] {
            assert_eq!(cell(&grid, coord), None);
            assert!(!is_hole(&grid, coord));
            assert!(!is_known(&grid, coord));
        }
    }

    #[test]
    fn test_set_cell() {
        let mut grid = Array2::<f32>::zeros((2, 3));
        assert!(set_cell(&mut grid, Coordinate::new(2, 1), 0.75));
        assert_eq!(grid.get([1, 2]).copied(), Some(0.75));
        assert!(!set_cell(&mut grid, Coordinate::new(3, 1), 0.75));
        assert!(!set_cell(&mut grid, Coordinate::new(-1, 0), 0.75));
        assert!((grid.sum() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_count_holes() {
        let grid = array![[HOLE_SENTINEL, 0.0], [HOLE_SENTINEL, HOLE_SENTINEL]];
        assert_eq!(count_holes(&grid), 3);
        assert_eq!(count_holes(&Array2::zeros((4, 4))), 0);
    }

    // Tests the mask reports first insertion and treats the outside as visited
    #[test]
    fn test_cell_mask() {
        let grid = Array2::<f32>::zeros((3, 4));
        let mut mask = CellMask::for_grid(&grid);
        let coord = Coordinate::new(3, 2);

        assert!(!mask.contains(coord));
        assert!(mask.insert(coord));
        assert!(!mask.insert(coord));
        assert!(mask.contains(coord));
        assert!(!mask.contains(Coordinate::new(2, 2)));

        assert!(mask.contains(Coordinate::new(4, 0)));
        assert!(mask.contains(Coordinate::new(0, -1)));
        assert!(!mask.insert(Coordinate::new(-1, -1)));
        assert_eq!(mask.count(), 1);
    }
}
