//! Console Game of Life
//!
//! This library provides the simulation engine for Conway's Game of Life on
//! a toroidal grid, together with the console rendering and input helpers the
//! binary wires around it.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{ConwayRules, Grid};
pub use simulation::{Outcome, Simulation};

use anyhow::Result;
use game_of_life::RandomCells;

/// Run a simulation to completion without rendering anything.
pub fn run_headless(settings: &Settings) -> Result<Outcome> {
    let sim_config = &settings.simulation;
    let source = match sim_config.seed {
        Some(seed) => RandomCells::from_seed(seed),
        None => RandomCells::from_entropy(),
    };

    let mut simulation = Simulation::new(
        sim_config.rows,
        sim_config.cols,
        sim_config.generations,
        source,
    )?;
    let outcome = simulation.run_with(|_, _| -> Result<()> { Ok(()) })?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_run_terminates() {
        let mut settings = Settings::default();
        settings.simulation.rows = 10;
        settings.simulation.cols = 10;
        settings.simulation.generations = 50;
        settings.simulation.seed = Some(3);

        let outcome = run_headless(&settings).unwrap();
        assert!(outcome.generation() >= 1);
        assert!(outcome.generation() <= 50);
    }

    #[test]
    fn test_headless_run_is_reproducible_with_seed() {
        let mut settings = Settings::default();
        settings.simulation.rows = 12;
        settings.simulation.cols = 12;
        settings.simulation.generations = 100;
        settings.simulation.seed = Some(99);

        let first = run_headless(&settings).unwrap();
        let second = run_headless(&settings).unwrap();
        assert_eq!(first, second);
    }
}
