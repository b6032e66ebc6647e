//! Game of Life transition rule and change detection

use super::error::EngineError;
use super::random::CellSource;
use super::Grid;

/// The Conway rule set over toroidal grids.
///
/// All operations are pure with respect to their grid arguments; the only
/// mutation is `create_next_grid`'s full overwrite of its destination buffer.
/// Borrowing rules guarantee the source and destination never alias.
pub struct ConwayRules;

impl ConwayRules {
    /// Create a grid of the given dimensions with every cell drawn
    /// independently from `source`.
    pub fn create_initial_grid<S: CellSource>(
        rows: usize,
        cols: usize,
        mut source: S,
    ) -> Result<Grid, EngineError> {
        let mut grid = Grid::new(rows, cols)?;
        for cell in grid.cells_mut() {
            *cell = source.next_cell();
        }
        Ok(grid)
    }

    /// The next state of a single cell given its current state and live
    /// neighbor count.
    pub fn should_be_alive(alive: bool, neighbors: u8) -> bool {
        neighbors == 3 || (alive && neighbors == 2)
    }

    /// Compute the next generation of `grid` into `next_grid`.
    ///
    /// Reads only from `grid`, so the visitation order has no effect on the
    /// result. Every cell of `next_grid` is assigned; callers may pass a
    /// buffer still holding an older generation.
    pub fn create_next_grid(grid: &Grid, next_grid: &mut Grid) -> Result<(), EngineError> {
        grid.check_same_shape(next_grid)?;

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let neighbors = grid.count_live_neighbors(row, col);
                let alive = grid.get(row, col);
                next_grid.set(row, col, Self::should_be_alive(alive, neighbors));
            }
        }
        Ok(())
    }

    /// True iff the two grids differ in at least one cell.
    ///
    /// Exits on the first difference; a `false` result means the grids are
    /// identical cell for cell. The orchestrator uses this as the fixed-point
    /// termination test. Longer oscillation cycles are deliberately not
    /// detected; a blinker runs until the generation limit.
    pub fn grid_changing(grid: &Grid, next_grid: &Grid) -> Result<bool, EngineError> {
        grid.check_same_shape(next_grid)?;
        Ok(grid
            .cells()
            .iter()
            .zip(next_grid.cells())
            .any(|(a, b)| a != b))
    }
}
