//! Trial loop.
//!
//! Generates a sequence, hands it to a [`Frontend`], scores the answer, and
//! repeats for the configured number of trials.

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::RngCore;

use crate::config::TrialSettings;
use crate::generator::generate_sequence;
use crate::model::TestResult;
use crate::scorer::prefix_score;
use crate::statistics::RunSummary;
use crate::traits::Frontend;

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_trial_start(&self, trial: usize, total: usize);
    fn on_trial_complete(&self, trial: usize, result: &TestResult);
    fn on_run_complete(&self, summary: &RunSummary, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_trial_start(&self, _: usize, _: usize) {}
    fn on_trial_complete(&self, _: usize, _: &TestResult) {}
    fn on_run_complete(&self, _: &RunSummary, _: Duration) {}
}

/// Runs trials according to a fixed set of [`TrialSettings`].
pub struct TrialEngine {
    settings: TrialSettings,
}

impl TrialEngine {
    pub fn new(settings: TrialSettings) -> Self {
        Self { settings }
    }

    /// Run a single display-then-recall round.
    pub fn run_trial<R: RngCore>(
        &self,
        frontend: &mut dyn Frontend,
        rng: &mut R,
    ) -> Result<TestResult> {
        let numbers = generate_sequence(
            rng,
            self.settings.min,
            self.settings.max,
            self.settings.numbers,
        )?;

        let shown_at = frontend.present(&numbers)?;
        let recall = frontend.collect()?;

        Ok(TestResult {
            score: prefix_score(&numbers, &recall.answer.numbers),
            duration: recall
                .finished_at
                .saturating_duration_since(shown_at)
                .as_secs_f64(),
            count: numbers.len() as u32,
        })
    }

    /// Run every trial, returning results in order.
    ///
    /// Any error (including the user quitting) ends the run and discards the
    /// results collected so far.
    pub fn run<R: RngCore>(
        &self,
        frontend: &mut dyn Frontend,
        rng: &mut R,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<TestResult>> {
        let start = Instant::now();
        let total = self.settings.trials;
        let mut results = Vec::with_capacity(total);

        for trial in 1..=total {
            progress.on_trial_start(trial, total);
            let result = self.run_trial(frontend, rng)?;
            progress.on_trial_complete(trial, &result);

            if self.settings.dry {
                frontend.feedback(trial, &result)?;
            }
            results.push(result);
        }

        let summary = RunSummary::from_results(&results);
        if self.settings.dry {
            frontend.summary(&summary)?;
        }
        progress.on_run_complete(&summary, start.elapsed());

        Ok(results)
    }
}
