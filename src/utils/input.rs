//! Bounds-validated integer prompting

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Read an integer in `[low, high]` from `input`, re-prompting on invalid or
/// out-of-bounds lines. Generic over the reader and writer so tests can drive
/// it with in-memory buffers.
pub fn read_integer_in_bounds<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    low: T,
    high: T,
) -> Result<T>
where
    T: FromStr + PartialOrd + Display + Copy,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}").context("Failed to write prompt")?;
        output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input stream closed while waiting for a value");
        }

        let value: T = match line.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                writeln!(output, "Input was not a valid integer value.")
                    .context("Failed to write message")?;
                continue;
            }
        };

        if value < low || value > high {
            writeln!(
                output,
                "Input was not inside the bounds (value <= {low} or value >= {high})."
            )
            .context("Failed to write message")?;
            continue;
        }

        return Ok(value);
    }
}

/// Prompt on stdout and read from stdin.
pub fn prompt_integer<T>(prompt: &str, low: T, high: T) -> Result<T>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    read_integer_in_bounds(&mut input, &mut output, prompt, low, high)
}

/// Block until the user presses Enter.
pub fn wait_for_enter(prompt: &str) -> Result<()> {
    let mut output = io::stdout().lock();
    write!(output, "{prompt}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(feed: &str, low: usize, high: usize) -> (Result<usize>, String) {
        let mut input = Cursor::new(feed.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_integer_in_bounds(&mut input, &mut output, "rows: ", low, high);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_value_in_bounds() {
        let (result, output) = read("15\n", 10, 60);
        assert_eq!(result.unwrap(), 15);
        assert_eq!(output, "rows: ");
    }

    #[test]
    fn test_accepts_bounds_inclusive() {
        assert_eq!(read("10\n", 10, 60).0.unwrap(), 10);
        assert_eq!(read("60\n", 10, 60).0.unwrap(), 60);
    }

    #[test]
    fn test_reprompts_on_non_integer() {
        let (result, output) = read("abc\n12\n", 10, 60);
        assert_eq!(result.unwrap(), 12);
        assert!(output.contains("not a valid integer"));
        assert_eq!(output.matches("rows: ").count(), 2);
    }

    #[test]
    fn test_reprompts_on_out_of_bounds() {
        let (result, output) = read("9\n61\n30\n", 10, 60);
        assert_eq!(result.unwrap(), 30);
        assert!(output.contains("not inside the bounds"));
        assert_eq!(output.matches("rows: ").count(), 3);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let (result, _) = read("  42  \n", 10, 60);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_closed_stream_errors() {
        let (result, _) = read("", 10, 60);
        assert!(result.is_err());
    }
}
