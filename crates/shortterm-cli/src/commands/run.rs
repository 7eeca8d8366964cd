//! The default `shortterm` command: run a series of trials.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::OsRng;

use shortterm_core::config::{expand_home, load_config_from, SettingsOverrides, TrialSettings};
use shortterm_core::engine::{ProgressReporter, TrialEngine};
use shortterm_core::model::{DatabaseRecord, TestResult};
use shortterm_core::statistics::RunSummary;
use shortterm_core::store::ResultStore;
use shortterm_terminal::{FullscreenFrontend, Keymap, PlainFrontend};

/// Progress reporter that writes to the tracing log.
struct LogReporter;

impl ProgressReporter for LogReporter {
    fn on_trial_start(&self, trial: usize, total: usize) {
        tracing::debug!(trial, total, "trial started");
    }

    fn on_trial_complete(&self, trial: usize, result: &TestResult) {
        tracing::debug!(
            trial,
            score = result.score,
            count = result.count,
            duration = result.duration,
            "trial complete"
        );
    }

    fn on_run_complete(&self, summary: &RunSummary, elapsed: Duration) {
        tracing::debug!(
            trials = summary.trials,
            total_score = summary.total_score,
            elapsed_secs = elapsed.as_secs_f64(),
            "run complete"
        );
    }
}

pub fn execute(
    file: Option<String>,
    config_path: Option<PathBuf>,
    overrides: SettingsOverrides,
    fullscreen: bool,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let settings = TrialSettings::resolve(&config, &overrides);
    settings.validate()?;

    let fullscreen = fullscreen || config.fullscreen;
    if fullscreen && settings.dry {
        tracing::warn!("dry mode only works with the plain frontend, ignoring fullscreen");
    }
    let fullscreen = fullscreen && !settings.dry;

    let path = expand_home(file.as_deref().unwrap_or(&config.database));
    let mut store = ResultStore::open(&path)?;

    tracing::debug!(
        path = %path.display(),
        previous_runs = store.records().len(),
        trials = settings.trials,
        numbers = settings.numbers,
        "starting run"
    );

    let engine = TrialEngine::new(settings);
    let mut rng = OsRng;
    let results = if fullscreen {
        let keymap = Keymap::from_config(&config.keys).context("invalid key bindings")?;
        let mut frontend = FullscreenFrontend::new(keymap)?;
        engine.run(&mut frontend, &mut rng, &LogReporter)?
    } else {
        let mut frontend = PlainFrontend::stdio();
        engine.run(&mut frontend, &mut rng, &LogReporter)?
    };

    let record = DatabaseRecord::new(results);
    let total_score = record.total_score;
    store.append(record);
    store.save()?;

    tracing::info!(
        path = %store.path().display(),
        total_score,
        runs = store.records().len(),
        "run saved"
    );
    Ok(())
}
