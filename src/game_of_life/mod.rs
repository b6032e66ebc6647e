//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod random;
pub mod rules;

pub use error::EngineError;
pub use grid::Grid;
pub use random::{CellSource, RandomCells};
pub use rules::ConwayRules;
