//! Grid representation and toroidal neighbor counting

use super::error::EngineError;
use itertools::iproduct;

/// A Game of Life grid on a torus.
///
/// Cells are stored row-major as booleans (`true` = alive). Dimensions are
/// fixed at construction; row and column indices wrap modulo `rows`/`cols`,
/// so the last row/column is adjacent to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create a grid from a 2D boolean array.
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, EngineError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }

        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(EngineError::RaggedRow {
                    row,
                    found: line.len(),
                    expected: cols,
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to the row-major 1D index.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at `(row, col)`. Indices wrap around the torus.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row % self.rows, col % self.cols)]
    }

    /// Set the cell at `(row, col)`. Indices wrap around the torus.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row % self.rows, col % self.cols);
        self.cells[idx] = alive;
    }

    /// Count the live cells in the Moore neighborhood of `(row, col)`,
    /// excluding the center cell itself.
    ///
    /// Offsets wrap modulo the grid dimensions, so edge and corner cells see
    /// their neighbors on the opposite edges. Always returns a value in 0..=8.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| !(dr == 0 && dc == 0))
            .filter(|&(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(self.rows as isize) as usize;
                let c = (col as isize + dc).rem_euclid(self.cols as isize) as usize;
                self.cells[self.index(r, c)]
            })
            .count() as u8
    }

    /// Count total living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check that two grids share dimensions; the engine's transition and
    /// comparison operations require matching buffer shapes.
    pub(crate) fn check_same_shape(&self, other: &Grid) -> Result<(), EngineError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(EngineError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.living_count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            EngineError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            EngineError::InvalidDimensions { rows: 5, cols: 0 }
        );
    }

    #[test]
    fn test_from_cells_rejects_ragged_rows() {
        let cells = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_cells(cells).unwrap_err(),
            EngineError::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_neighbor_count_center() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_neighbor_count_wraps_around_corners() {
        // 3x3 all alive except the center: on a torus every live cell's
        // neighborhood covers the whole grid minus itself, so each counts 7.
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (1, 1) {
                    assert_eq!(grid.count_live_neighbors(row, col), 7, "at ({row},{col})");
                }
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_neighbor_count_single_cell_wrap() {
        // A lone live cell at a corner is seen across the seams of the torus.
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true);

        assert_eq!(grid.count_live_neighbors(3, 3), 1);
        assert_eq!(grid.count_live_neighbors(0, 3), 1);
        assert_eq!(grid.count_live_neighbors(3, 0), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
        // The live cell does not count itself.
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_in_range() {
        let cells = vec![
            vec![true, true, true, true],
            vec![true, true, true, true],
            vec![true, true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                assert!(grid.count_live_neighbors(row, col) <= 8);
            }
        }
    }

    #[test]
    fn test_get_set_wrap() {
        let mut grid = Grid::new(4, 6).unwrap();
        grid.set(4, 6, true); // wraps to (0, 0)
        assert!(grid.get(0, 0));
        assert!(grid.get(8, 12));
    }

    #[test]
    fn test_shape_check() {
        let a = Grid::new(3, 3).unwrap();
        let b = Grid::new(3, 4).unwrap();
        assert!(a.check_same_shape(&a.clone()).is_ok());
        assert_eq!(
            a.check_same_shape(&b).unwrap_err(),
            EngineError::DimensionMismatch {
                left_rows: 3,
                left_cols: 3,
                right_rows: 3,
                right_cols: 4,
            }
        );
    }
}
