//! # Interactive Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! Line-based prompts used by the interactive menu. `Prompter` is generic
//! over its reader and writer so the menu can be driven by a byte buffer in
//! tests and by locked stdin/stdout in the binary.
//!
//! End of input is reported as the `InputClosed` error; callers detect it
//! with `downcast_ref::<InputClosed>()`.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{BufRead, Write};
use thiserror::Error;

/// The input stream ended while a prompt was waiting for an answer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Input closed before a response was entered.")]
pub struct InputClosed;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output, for rendering tables between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to terminal")
    }

    /// Prompts with `label: ` and returns the trimmed answer (possibly empty).
    pub fn line(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label).context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal output")?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(buf.trim().to_string())
    }

    /// Like `line`, but an empty answer becomes `None`.
    pub fn optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.line(label)?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    /// Re-prompts until a non-empty answer is given.
    pub fn nonempty(&mut self, label: &str) -> Result<String> {
        loop {
            let answer = self.line(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("  Please enter a value.")?;
        }
    }

    /// Re-prompts until the answer matches one of `choices`, ignoring case.
    /// Returns the matching entry of `choices`.
    pub fn choice<'c>(&mut self, label: &str, choices: &[&'c str]) -> Result<&'c str> {
        let label = format!("{} [{}]", label, choices.join("/"));
        loop {
            let answer = self.line(&label)?;
            if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
                return Ok(*choice);
            }
            self.say(&format!("  Please choose one of: {}", choices.join(", ")))?;
        }
    }
}
