//! Simulation orchestration

pub mod runner;

pub use runner::{Outcome, Simulation};
