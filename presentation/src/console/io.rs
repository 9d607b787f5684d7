//! Line-oriented console I/O
//!
//! Every read returns `Ok(None)` at end of input so callers can stop
//! cleanly instead of looping on an exhausted stream.

use colored::Colorize;
use quizmaker_application::InteractionError;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Prompt/response console over any reader and writer
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line, ignoring write failures
    pub fn say(&mut self, text: impl Display) {
        let _ = writeln!(self.output, "{}", text);
    }

    /// Print a prompt and read one trimmed line
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, InteractionError> {
        write!(self.output, "{} ", label.bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the next output off the prompt line
            let _ = writeln!(self.output);
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is not blank
    pub fn read_non_empty(
        &mut self,
        label: &str,
        what: &str,
    ) -> Result<Option<String>, InteractionError> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            self.say(format!("{} cannot be empty.", what).red());
        }
    }

    /// Ask until the answer is a number within `range`
    pub fn read_number(
        &mut self,
        label: &str,
        range: RangeInclusive<usize>,
    ) -> Result<Option<usize>, InteractionError> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                _ => self.say(
                    format!(
                        "Please enter a number between {} and {}.",
                        range.start(),
                        range.end()
                    )
                    .red(),
                ),
            }
        }
    }

    /// Ask a yes/no question until the answer is one of the two
    pub fn confirm(&mut self, label: &str) -> Result<Option<bool>, InteractionError> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.to_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => self.say("Please answer yes or no.".red()),
            }
        }
    }
}
