//! # Prompt Boundary
//!
//! Blocking prompt/response exchange between the menus and the terminal.
//! Generic over reader and writer so scripted tests can drive a whole
//! session without a terminal.

use std::io::{self, BufRead, Write};

/// Console prompter: asks, re-asks on invalid input, returns validated
/// values. The core crate never sees raw input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over stdin/stdout
    pub fn stdio() -> Self {
        Prompter {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary reader/writer pairs
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Read an integer in `[min, max]`, re-asking until one is given
    pub fn read_choice(&mut self, prompt: &str, min: u32, max: u32) -> io::Result<u32> {
        loop {
            let line = self.ask(prompt)?;
            match line.trim().parse::<u32>() {
                Ok(n) if n >= min && n <= max => return Ok(n),
                _ => writeln!(
                    self.output,
                    "Invalid input. Please enter a number between {} and {}.",
                    min, max
                )?,
            }
        }
    }

    /// Read a non-empty line, re-asking on empty input
    pub fn read_non_empty(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let line = self.ask(prompt)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                writeln!(self.output, "Input cannot be empty. Please try again.")?;
            } else {
                return Ok(trimmed.to_string());
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // Input closed mid-session
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line)
    }
}
