//! Contract-violation errors for the simulation engine

use thiserror::Error;

/// Errors raised when the engine is handed malformed grids.
///
/// Well-formed input (positive dimensions, matching buffer shapes) never
/// fails, so these only surface on caller bugs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("grid dimensions {left_rows}x{left_cols} do not match {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}
