//! Tabular and JSON views of the result log.

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use serde_json::json;

use shortterm_core::model::DatabaseRecord;
use shortterm_core::statistics::{record_accuracy, HistoryStats};

/// Table of past runs, oldest first, keeping only the last `limit` runs.
///
/// Run numbers count from the start of the whole log, not from the window.
pub fn history_table(records: &[DatabaseRecord], limit: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Date",
        "Trials",
        "Score",
        "Accuracy",
        "Avg Duration",
    ]);

    let skip = limit.map_or(0, |n| records.len().saturating_sub(n));
    for (index, record) in records.iter().enumerate().skip(skip) {
        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(&record.date),
            Cell::new(record.results.len()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}/{}", record.total_score, record.total_items()))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", record_accuracy(record) * 100.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}s", record.avg_duration)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Summary lines printed under the history table.
pub fn stats_lines(stats: &HistoryStats) -> Vec<String> {
    let mut lines = vec![
        format!("Runs: {}", stats.runs),
        format!("Best total score: {}", stats.best_total_score),
        format!("Mean accuracy: {:.1}%", stats.mean_accuracy * 100.0),
    ];
    if let Some(fastest) = stats.fastest_avg_duration {
        lines.push(format!("Fastest average duration: {fastest:.2}s"));
    }
    lines
}

/// Pretty JSON with the aggregate stats and the selected runs.
pub fn history_json(records: &[DatabaseRecord], limit: Option<usize>) -> Result<String> {
    let skip = limit.map_or(0, |n| records.len().saturating_sub(n));
    let stats = HistoryStats::from_records(records);
    let value = json!({
        "stats": stats,
        "runs": &records[skip..],
    });
    serde_json::to_string_pretty(&value).context("failed to serialize history")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortterm_core::model::TestResult;

    fn record(date: &str, score: u32) -> DatabaseRecord {
        DatabaseRecord {
            date: date.into(),
            avg_duration: 3.5,
            total_score: score as u64,
            results: vec![TestResult {
                score,
                duration: 3.5,
                count: 10,
            }],
        }
    }

    #[test]
    fn table_lists_every_run() {
        let records = vec![record("2024-01-01", 4), record("2024-01-02", 9)];
        let rendered = history_table(&records, None).to_string();
        assert!(rendered.contains("2024-01-01"));
        assert!(rendered.contains("2024-01-02"));
        assert!(rendered.contains("9/10"));
        assert!(rendered.contains("90.0%"));
        assert!(rendered.contains("3.50s"));
    }

    #[test]
    fn limit_keeps_the_newest_runs() {
        let records = vec![
            record("day-one", 1),
            record("day-two", 2),
            record("day-three", 3),
        ];
        let rendered = history_table(&records, Some(2)).to_string();
        assert!(!rendered.contains("day-one"));
        assert!(rendered.contains("day-two"));
        assert!(rendered.contains("day-three"));
    }

    #[test]
    fn limit_larger_than_log_shows_all() {
        let records = vec![record("only", 1)];
        let rendered = history_table(&records, Some(10)).to_string();
        assert!(rendered.contains("only"));
    }

    #[test]
    fn stats_lines_skip_missing_fastest() {
        let lines = stats_lines(&HistoryStats::from_records(&[]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Runs: 0");
    }

    #[test]
    fn json_contains_stats_and_runs() {
        let records = vec![record("a", 2), record("b", 8)];
        let json = history_json(&records, Some(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["runs"], 2);
        assert_eq!(value["stats"]["best_total_score"], 8);
        assert_eq!(value["runs"].as_array().unwrap().len(), 1);
        assert_eq!(value["runs"][0]["date"], "b");
    }
}
