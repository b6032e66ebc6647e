//! Configuration management for the console Game of Life

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, Settings, SimulationConfig, COL_BOUNDS, GENERATION_BOUNDS,
    ROW_BOUNDS,
};
