//! Console I/O helpers

pub mod display;
pub mod input;

pub use display::{ColorOutput, GridRenderer};
pub use input::{prompt_integer, read_integer_in_bounds, wait_for_enter};
