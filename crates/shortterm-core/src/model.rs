//! Core data model types for shortterm.
//!
//! These are the records produced by a trial run and persisted to the
//! history log. Field names are part of the on-disk JSON format.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::statistics::RunSummary;

/// Outcome of a single display-then-recall round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Length of the matching prefix between shown and recalled numbers.
    pub score: u32,
    /// Seconds from display to confirmation of the answer.
    pub duration: f64,
    /// Number of values shown in this trial.
    pub count: u32,
}

/// Persisted summary of one program run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRecord {
    /// Free-text timestamp of when the run finished.
    pub date: String,
    /// Mean trial duration in seconds.
    pub avg_duration: f64,
    /// Sum of all trial scores.
    pub total_score: u64,
    /// Per-trial results, in the order they were run.
    #[serde(default)]
    pub results: Vec<TestResult>,
}

impl DatabaseRecord {
    /// Build a record stamped with the current local time.
    pub fn new(results: Vec<TestResult>) -> Self {
        Self::at(Local::now(), results)
    }

    /// Build a record stamped with an explicit time.
    pub fn at(when: DateTime<Local>, results: Vec<TestResult>) -> Self {
        let summary = RunSummary::from_results(&results);
        Self {
            date: when.to_rfc3339(),
            avg_duration: summary.avg_duration,
            total_score: summary.total_score,
            results,
        }
    }

    /// Total number of values shown across all trials.
    pub fn total_items(&self) -> u64 {
        self.results.iter().map(|r| r.count as u64).sum()
    }
}

/// A parsed recall attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    /// Numbers in the order they were typed.
    pub numbers: Vec<i64>,
    /// How many tokens were not numeric and became zero.
    pub coerced: usize,
}
