//! Simulation runner: buffer pair, stability check, generation loop

use crate::game_of_life::{CellSource, ConwayRules, EngineError, Grid};
use std::mem;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The grid reached a fixed point before the given generation was rendered.
    Stable { generation: u64 },
    /// The configured generation count ran out with no fixed point detected.
    Exhausted { generation: u64 },
}

impl Outcome {
    /// The generation the run stopped at.
    pub fn generation(&self) -> u64 {
        match *self {
            Outcome::Stable { generation } | Outcome::Exhausted { generation } => generation,
        }
    }
}

/// Owns the two grid buffers and drives the generation loop.
///
/// Each generation the roles of "current" and "next" swap: the current grid
/// is the read-only source for the transition and the other buffer is fully
/// overwritten, then the pair is swapped in place. Neither buffer is ever
/// reallocated after construction.
pub struct Simulation {
    current: Grid,
    next: Grid,
    generations: u64,
}

impl Simulation {
    /// Set up a run: two independently randomized buffers of the same shape.
    pub fn new<S: CellSource>(
        rows: usize,
        cols: usize,
        generations: u64,
        mut source: S,
    ) -> Result<Self, EngineError> {
        let current = ConwayRules::create_initial_grid(rows, cols, &mut source)?;
        let next = ConwayRules::create_initial_grid(rows, cols, &mut source)?;
        Ok(Self {
            current,
            next,
            generations,
        })
    }

    /// Set up a run from explicit buffers, for callers that want a known
    /// starting state.
    pub fn from_grids(current: Grid, next: Grid, generations: u64) -> Result<Self, EngineError> {
        current.check_same_shape(&next)?;
        Ok(Self {
            current,
            next,
            generations,
        })
    }

    /// The generation currently held in the read buffer.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Run to completion, invoking `observe` with each generation before it
    /// is evolved. The observer is where rendering and pacing live; the
    /// runner itself performs no I/O.
    ///
    /// The stability check compares the newest generation against the one
    /// before it, so a fixed point stops the run before being re-rendered.
    /// Note that generation 1 compares the two independently initialized
    /// buffers, which only coincide if the random source repeats itself.
    pub fn run_with<F, E>(&mut self, mut observe: F) -> Result<Outcome, E>
    where
        F: FnMut(&Grid, u64) -> Result<(), E>,
        E: From<EngineError>,
    {
        for generation in 1..=self.generations {
            if !ConwayRules::grid_changing(&self.current, &self.next)? {
                return Ok(Outcome::Stable { generation });
            }

            observe(&self.current, generation)?;
            ConwayRules::create_next_grid(&self.current, &mut self.next)?;
            mem::swap(&mut self.current, &mut self.next);
        }

        Ok(Outcome::Exhausted {
            generation: self.generations,
        })
    }
}
