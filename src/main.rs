//! Main CLI application for the console Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_console::{
    config::{CliOverrides, Settings, COL_BOUNDS, GENERATION_BOUNDS, ROW_BOUNDS},
    game_of_life::RandomCells,
    simulation::{Outcome, Simulation},
    utils::{prompt_integer, wait_for_enter, ColorOutput, GridRenderer},
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_console")]
#[command(about = "Conway's Game of Life in the console")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid rows (overrides config, skips the prompt)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Grid columns (overrides config, skips the prompt)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of generations (overrides config, skips the prompt)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Delay between generations in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Fixed RNG seed for a reproducible run (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Take all dimensions from config/flags instead of prompting
        #[arg(long)]
        no_prompt: bool,
    },

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            generations,
            delay_ms,
            seed,
            no_prompt,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                generations,
                delay_ms,
                seed,
            };
            run_command(config, overrides, no_prompt)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, no_prompt: bool) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // A dimension is prompted for unless pinned by a flag or --no-prompt.
    let prompt_rows = overrides.rows.is_none() && !no_prompt;
    let prompt_cols = overrides.cols.is_none() && !no_prompt;
    let prompt_generations = overrides.generations.is_none() && !no_prompt;

    settings.merge_with_cli(&overrides);

    let renderer = GridRenderer::new(&settings.display);
    renderer.clear_screen()?;

    if prompt_rows {
        settings.simulation.rows = prompt_integer(
            &format!("Enter the number of rows ({}-{}): ", ROW_BOUNDS.0, ROW_BOUNDS.1),
            ROW_BOUNDS.0,
            ROW_BOUNDS.1,
        )?;
    }
    if prompt_cols {
        settings.simulation.cols = prompt_integer(
            &format!("Enter the number of cols ({}-{}): ", COL_BOUNDS.0, COL_BOUNDS.1),
            COL_BOUNDS.0,
            COL_BOUNDS.1,
        )?;
    }
    if prompt_generations {
        settings.simulation.generations = prompt_integer(
            &format!(
                "Enter the number of generations ({}-{}): ",
                GENERATION_BOUNDS.0, GENERATION_BOUNDS.1
            ),
            GENERATION_BOUNDS.0,
            GENERATION_BOUNDS.1,
        )?;
    }

    settings.validate().context("Configuration validation failed")?;

    let source = match settings.simulation.seed {
        Some(seed) => RandomCells::from_seed(seed),
        None => RandomCells::from_entropy(),
    };

    let mut simulation = Simulation::new(
        settings.simulation.rows,
        settings.simulation.cols,
        settings.simulation.generations,
        source,
    )
    .context("Failed to create simulation")?;

    let delay = Duration::from_millis(settings.simulation.step_delay_ms);
    let outcome = simulation.run_with(|grid, generation| -> Result<()> {
        renderer.draw(grid, generation)?;
        thread::sleep(delay);
        Ok(())
    })?;

    // Show the final grid once more before reporting the outcome.
    renderer.draw(simulation.current(), outcome.generation())?;

    match outcome {
        Outcome::Stable { generation } => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Grid reached a stable state at generation {}.",
                    generation
                ))
            );
        }
        Outcome::Exhausted { generation } => {
            println!(
                "{}",
                ColorOutput::info(&format!("Completed {} generations.", generation))
            );
        }
    }

    wait_for_enter("Press <Enter> to exit.")?;
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
