//! The `shortterm history` command.

use std::path::PathBuf;

use anyhow::Result;

use shortterm_core::config::{expand_home, load_config_from};
use shortterm_core::statistics::HistoryStats;
use shortterm_core::store::ResultStore;
use shortterm_report::history::{history_json, history_table, stats_lines};

pub fn execute(
    file: Option<String>,
    config_path: Option<PathBuf>,
    limit: Option<usize>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = expand_home(file.as_deref().unwrap_or(&config.database));
    let records = ResultStore::load(&path)?;

    match format.as_str() {
        "json" => {
            println!("{}", history_json(&records, limit)?);
        }
        "table" => {
            if records.is_empty() {
                println!("No runs recorded in {}", path.display());
                return Ok(());
            }
            println!("{}", history_table(&records, limit));
            println!();
            for line in stats_lines(&HistoryStats::from_records(&records)) {
                println!("{line}");
            }
        }
        other => anyhow::bail!("unknown format '{other}', expected 'table' or 'json'"),
    }

    Ok(())
}
