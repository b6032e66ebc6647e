//! Console rendering and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Renders grid frames to the console.
pub struct GridRenderer {
    alive_glyph: char,
    dead_glyph: char,
}

impl GridRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            alive_glyph: display.alive_glyph,
            dead_glyph: display.dead_glyph,
        }
    }

    /// Format one frame: a generation header followed by the grid, each cell
    /// as its glyph plus a space.
    ///
    /// The whole frame is composed into a single string and written in one
    /// call to reduce flicker.
    pub fn format_frame(&self, grid: &Grid, generation: u64) -> String {
        let mut output =
            String::with_capacity(64 + grid.rows() * (grid.cols() * 2 + 1));

        output.push_str(&format!(
            "Generation {} - To exit the program early press <Ctrl-C>\n",
            generation
        ));
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                output.push(if grid.get(row, col) {
                    self.alive_glyph
                } else {
                    self.dead_glyph
                });
                output.push(' ');
            }
            output.push('\n');
        }

        output
    }

    /// Clear the console and home the cursor.
    pub fn clear_screen(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear console")?;
        Ok(())
    }

    /// Clear the console and draw one frame.
    pub fn draw(&self, grid: &Grid, generation: u64) -> Result<()> {
        self.clear_screen()?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(self.format_frame(grid, generation).as_bytes())
            .context("Failed to write frame")?;
        stdout.flush().context("Failed to flush console")?;
        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
