//! Scripted frontend for testing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::error::TrialError;
use crate::model::TestResult;
use crate::parser::{format_sequence, parse_answer};
use crate::statistics::RunSummary;
use crate::traits::{Frontend, Recall};

/// One scripted reaction to a presented sequence.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    /// Type this text as the answer.
    Answer(String),
    /// Type back exactly what was shown.
    Echo,
    /// Press the quit key.
    Quit,
}

/// A frontend that replays a script instead of talking to a terminal.
///
/// Recall times are synthetic: every answer is confirmed `recall_time` after
/// the sequence was shown.
pub struct ScriptedFrontend {
    script: VecDeque<ScriptStep>,
    repeat_echo: bool,
    recall_time: Duration,
    shown_at: Option<Instant>,
    presented: Vec<Vec<i64>>,
    feedback: Vec<(usize, TestResult)>,
    summaries: Vec<RunSummary>,
}

impl ScriptedFrontend {
    /// Create a frontend that plays `steps` once, then reports closed input.
    pub fn new(steps: Vec<ScriptStep>, recall_time: Duration) -> Self {
        Self {
            script: steps.into(),
            repeat_echo: false,
            recall_time,
            shown_at: None,
            presented: Vec::new(),
            feedback: Vec::new(),
            summaries: Vec::new(),
        }
    }

    /// Create a frontend that always recalls perfectly.
    pub fn perfect(recall_time: Duration) -> Self {
        Self {
            repeat_echo: true,
            ..Self::new(Vec::new(), recall_time)
        }
    }

    /// Every sequence presented so far.
    pub fn presented(&self) -> &[Vec<i64>] {
        &self.presented
    }

    /// `(trial, result)` pairs passed to [`Frontend::feedback`].
    pub fn feedback_log(&self) -> &[(usize, TestResult)] {
        &self.feedback
    }

    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }
}

impl Frontend for ScriptedFrontend {
    fn present(&mut self, numbers: &[i64]) -> Result<Instant> {
        let now = Instant::now();
        self.shown_at = Some(now);
        self.presented.push(numbers.to_vec());
        Ok(now)
    }

    fn collect(&mut self) -> Result<Recall> {
        let step = match self.script.pop_front() {
            Some(step) => step,
            None if self.repeat_echo => ScriptStep::Echo,
            None => return Err(TrialError::InputClosed.into()),
        };

        let text = match step {
            ScriptStep::Answer(text) => text,
            ScriptStep::Echo => self
                .presented
                .last()
                .map(|shown| format_sequence(shown))
                .unwrap_or_default(),
            ScriptStep::Quit => return Err(TrialError::Aborted.into()),
        };

        let shown_at = self.shown_at.unwrap_or_else(Instant::now);
        Ok(Recall {
            answer: parse_answer(&text),
            finished_at: shown_at + self.recall_time,
        })
    }

    fn feedback(&mut self, trial: usize, result: &TestResult) -> Result<()> {
        self.feedback.push((trial, *result));
        Ok(())
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.summaries.push(*summary);
        Ok(())
    }
}
