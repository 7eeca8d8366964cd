//! Run and history statistics.

use serde::{Deserialize, Serialize};

use crate::model::{DatabaseRecord, TestResult};

/// Aggregates for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of trials in the run.
    pub trials: usize,
    /// Sum of trial scores.
    pub total_score: u64,
    /// Mean trial duration in seconds (0.0 for an empty run).
    pub avg_duration: f64,
    /// Number of values shown across all trials.
    pub total_items: u64,
    /// `total_score / total_items`, or 0.0 when nothing was shown.
    pub accuracy: f64,
}

impl RunSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let total_score: u64 = results.iter().map(|r| r.score as u64).sum();
        let total_items: u64 = results.iter().map(|r| r.count as u64).sum();
        let total_duration: f64 = results.iter().map(|r| r.duration).sum();

        let avg_duration = if results.is_empty() {
            0.0
        } else {
            total_duration / results.len() as f64
        };

        Self {
            trials: results.len(),
            total_score,
            avg_duration,
            total_items,
            accuracy: ratio(total_score, total_items),
        }
    }
}

/// Aggregates across every persisted run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    /// Number of runs in the log.
    pub runs: usize,
    /// Highest total score of any run.
    pub best_total_score: u64,
    /// Mean of per-run accuracy.
    pub mean_accuracy: f64,
    /// Lowest average duration of any run with at least one trial.
    pub fastest_avg_duration: Option<f64>,
}

impl HistoryStats {
    pub fn from_records(records: &[DatabaseRecord]) -> Self {
        let best_total_score = records.iter().map(|r| r.total_score).max().unwrap_or(0);

        let mean_accuracy = if records.is_empty() {
            0.0
        } else {
            records.iter().map(record_accuracy).sum::<f64>() / records.len() as f64
        };

        let fastest_avg_duration = records
            .iter()
            .filter(|r| !r.results.is_empty())
            .map(|r| r.avg_duration)
            .fold(None, |best: Option<f64>, d| {
                Some(best.map_or(d, |b| b.min(d)))
            });

        Self {
            runs: records.len(),
            best_total_score,
            mean_accuracy,
            fastest_avg_duration,
        }
    }
}

/// Fraction of shown values recalled in a persisted run.
pub fn record_accuracy(record: &DatabaseRecord) -> f64 {
    ratio(record.total_score, record.total_items())
}

fn ratio(score: u64, items: u64) -> f64 {
    if items == 0 {
        0.0
    } else {
        score as f64 / items as f64
    }
}
