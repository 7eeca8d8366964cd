//! Line-oriented frontend.
//!
//! Prints the sequence on one line, waits for Enter, clears the screen, and
//! reads the answer as a line. Works over any `BufRead`/`Write` pair so it
//! can run against stdin/stdout or in-memory buffers.

use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use shortterm_core::error::TrialError;
use shortterm_core::model::TestResult;
use shortterm_core::parser::{format_sequence, parse_answer};
use shortterm_core::statistics::RunSummary;
use shortterm_core::traits::{Frontend, Recall};
use shortterm_report::summary::{run_lines, trial_lines};

pub struct PlainFrontend<R, W> {
    input: R,
    output: W,
}

impl PlainFrontend<io::StdinLock<'static>, Stdout> {
    /// Frontend bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PlainFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Err(TrialError::InputClosed.into());
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Frontend for PlainFrontend<R, W> {
    fn present(&mut self, numbers: &[i64]) -> Result<Instant> {
        self.clear()?;
        let shown_at = Instant::now();
        writeln!(self.output, "{}", format_sequence(numbers))?;
        self.output.flush()?;

        self.read_line()?;
        self.clear()?;
        Ok(shown_at)
    }

    fn collect(&mut self) -> Result<Recall> {
        let line = self.read_line()?;
        let finished_at = Instant::now();
        self.clear()?;
        Ok(Recall {
            answer: parse_answer(&line),
            finished_at,
        })
    }

    fn feedback(&mut self, trial: usize, result: &TestResult) -> Result<()> {
        for line in trial_lines(trial, result) {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        self.read_line()?;
        self.clear()
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        for line in run_lines(summary) {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(())
    }
}
