//! Interactive prompts
//!
//! Reads answers line by line from any `BufRead` so handlers can be driven
//! by stdin in the binary and by a byte buffer in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{BeerusError, BeerusResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label: ` and read one line, without its line ending
    ///
    /// End of input aborts the action.
    pub fn ask(&mut self, label: &str) -> BeerusResult<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(BeerusError::UserAborted);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Ask a yes/no question; only an explicit yes counts
    pub fn confirm(&mut self, question: &str) -> BeerusResult<bool> {
        write!(self.output, "{} [y/N] ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        let answer = line.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Confirm, or fail with [`BeerusError::UserAborted`]
    pub fn require(&mut self, question: &str, assume_yes: bool) -> BeerusResult<()> {
        if assume_yes || self.confirm(question)? {
            Ok(())
        } else {
            Err(BeerusError::UserAborted)
        }
    }
}
