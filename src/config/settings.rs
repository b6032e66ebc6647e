//! Configuration settings for the console Game of Life

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prompt bounds for grid rows.
pub const ROW_BOUNDS: (usize, usize) = (10, 60);
/// Prompt bounds for grid columns.
pub const COL_BOUNDS: (usize, usize) = (10, 118);
/// Prompt bounds for the generation count.
pub const GENERATION_BOUNDS: (u64, u64) = (1, 100_000);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Default grid rows offered when the user is not prompted.
    pub rows: usize,
    /// Default grid columns offered when the user is not prompted.
    pub cols: usize,
    /// Default generation limit.
    pub generations: u64,
    /// Delay between rendered generations, in milliseconds.
    pub step_delay_ms: u64,
    /// Fixed RNG seed for reproducible runs; absent means OS entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 20,
                cols: 40,
                generations: 200,
                step_delay_ms: 200,
                seed: None,
            },
            display: DisplayConfig {
                alive_glyph: '@',
                dead_glyph: '.',
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings against the prompt bounds
    pub fn validate(&self) -> Result<()> {
        let (row_low, row_high) = ROW_BOUNDS;
        if self.simulation.rows < row_low || self.simulation.rows > row_high {
            anyhow::bail!(
                "Rows must be between {} and {}, got {}",
                row_low,
                row_high,
                self.simulation.rows
            );
        }

        let (col_low, col_high) = COL_BOUNDS;
        if self.simulation.cols < col_low || self.simulation.cols > col_high {
            anyhow::bail!(
                "Cols must be between {} and {}, got {}",
                col_low,
                col_high,
                self.simulation.cols
            );
        }

        let (gen_low, gen_high) = GENERATION_BOUNDS;
        if self.simulation.generations < gen_low || self.simulation.generations > gen_high {
            anyhow::bail!(
                "Generations must be between {} and {}, got {}",
                gen_low,
                gen_high,
                self.simulation.generations
            );
        }

        if self.display.alive_glyph == self.display.dead_glyph {
            anyhow::bail!(
                "Alive and dead glyphs must differ, both are '{}'",
                self.display.alive_glyph
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.step_delay_ms = delay_ms;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations: Option<u64>,
    pub delay_ms: Option<u64>,
    pub seed: Option<u64>,
}
