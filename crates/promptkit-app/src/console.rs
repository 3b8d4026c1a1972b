//! Line-oriented terminal I/O for the example drivers.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads prompted lines from `input` and writes transcript text to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one trimmed line.
    ///
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// A horizontal rule of `width` copies of `ch`.
    pub fn rule(&mut self, ch: char, width: usize) -> io::Result<()> {
        let rule: String = std::iter::repeat(ch).take(width).collect();
        writeln!(self.output, "{rule}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
