//! shortterm CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use shortterm_core::config::SettingsOverrides;
use shortterm_core::error::TrialError;

mod commands;

/// Exit code used when the user leaves with the quit key.
const EXIT_ABORTED: i32 = 130;

#[derive(Parser)]
#[command(
    name = "shortterm",
    version,
    about = "Short-term memory trainer",
    long_about = "Shows sequences of random numbers, asks you to type them back, \
                  scores each attempt by its matching prefix, and keeps a history of runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Result log file (a leading ~/ expands to the home directory)
    #[arg(short = 'f', long = "file", global = true)]
    file: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
struct RunArgs {
    /// Number of trials [default: 20]
    #[arg(short = 'n', long = "trials")]
    trials: Option<usize>,

    /// Numbers shown per trial [default: 7]
    #[arg(short = 'c', long = "count")]
    count: Option<usize>,

    /// Lowest value shown [default: 10]
    #[arg(short = 'i', long = "min", allow_negative_numbers = true)]
    min: Option<i64>,

    /// Upper bound of values shown, exclusive [default: 99]
    #[arg(short = 'a', long = "max", allow_negative_numbers = true)]
    max: Option<i64>,

    /// Show each trial's score and duration, and a summary at the end
    #[arg(long, conflicts_with = "fullscreen")]
    dry: bool,

    /// Draw on the full terminal screen with live answer editing
    #[arg(long)]
    fullscreen: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show past runs from the result log
    History {
        /// Only show the most recent N runs
        #[arg(long)]
        limit: Option<usize>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shortterm=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::History { limit, format }) => {
            commands::history::execute(cli.file, cli.config, limit, format)
        }
        None => {
            let overrides = SettingsOverrides {
                trials: cli.run.trials,
                numbers: cli.run.count,
                min: cli.run.min,
                max: cli.run.max,
                dry: cli.run.dry,
            };
            commands::run::execute(cli.file, cli.config, overrides, cli.run.fullscreen)
        }
    };

    if let Err(e) = result {
        if e.downcast_ref::<TrialError>().is_some_and(TrialError::is_abort) {
            eprintln!("Aborted, nothing saved.");
            process::exit(EXIT_ABORTED);
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
