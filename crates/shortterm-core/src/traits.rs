//! Frontend trait definition.
//!
//! Implemented by the plain and full-screen frontends in `shortterm-terminal`
//! and by [`crate::mock::ScriptedFrontend`] for tests.

use std::time::Instant;

use anyhow::Result;

use crate::model::{Answer, TestResult};
use crate::statistics::RunSummary;

/// What the user typed back, and when they confirmed it.
#[derive(Debug, Clone)]
pub struct Recall {
    pub answer: Answer,
    /// Taken when the confirm action is received.
    pub finished_at: Instant,
}

/// Something that can show a sequence to the user and read it back.
pub trait Frontend {
    /// Show `numbers`, block until the user is ready, then hide them.
    ///
    /// Returns the instant taken immediately before the numbers were drawn.
    fn present(&mut self, numbers: &[i64]) -> Result<Instant>;

    /// Read the user's recall attempt.
    fn collect(&mut self) -> Result<Recall>;

    /// Show the outcome of a trial. Only called in dry mode.
    fn feedback(&mut self, _trial: usize, _result: &TestResult) -> Result<()> {
        Ok(())
    }

    /// Show totals at the end of a run. Only called in dry mode.
    fn summary(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}
