//! Text shown after a trial and at the end of a dry run.

use shortterm_core::model::TestResult;
use shortterm_core::statistics::RunSummary;

/// Lines describing one finished trial.
pub fn trial_lines(trial: usize, result: &TestResult) -> Vec<String> {
    vec![
        format!("Trial {trial}"),
        format!("Score: {} of {}", result.score, result.count),
        format!("Duration: {:.2}s", result.duration),
    ]
}

/// Lines describing a finished run.
pub fn run_lines(summary: &RunSummary) -> Vec<String> {
    vec![
        format!("Total score: {}", summary.total_score),
        format!("Average duration: {:.2}s", summary.avg_duration),
        format!(
            "Accuracy: {:.1}% over {} trials",
            summary.accuracy * 100.0,
            summary.trials
        ),
    ]
}
