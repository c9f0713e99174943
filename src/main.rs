mod input;
mod model;
mod pipeline;
mod report;
mod tracing;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::{load_run_records, read_db};
use crate::model::entry::{filter_entries, find_by_id};
use crate::pipeline::{aggregate, aggregate_strict};
use crate::report::text::render_leaderboard_text;
use crate::report::{write_db, write_summary};

#[derive(Debug, Parser)]
#[command(
    name = "llmark-leaderboard",
    version,
    about = "Fold per-run benchmark reports into one leaderboard entry per model"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate a directory of reports into db.json
    Run(RunConfig),
    /// Look up entries in an existing db.json
    Query(QueryConfig),
}

#[derive(Debug, Clone, Args)]
struct RunConfig {
    /// Directory of per-run JSON reports (*.json, *.json.gz)
    #[arg(long = "input", value_name = "DIR")]
    input_dir: PathBuf,

    /// Output database path
    #[arg(long = "out", value_name = "FILE")]
    out_path: PathBuf,

    /// Optional plain-text leaderboard
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Fail the whole batch on a report without a model name instead of skipping it
    #[arg(long)]
    fail_on_invalid: bool,
}

#[derive(Debug, Clone, Args)]
struct QueryConfig {
    /// Database written by `run`
    #[arg(long = "db", value_name = "FILE")]
    db_path: PathBuf,

    /// Routing id of a single model; prints its full JSON entry
    #[arg(long, conflicts_with = "filter")]
    id: Option<String>,

    /// Case-insensitive match on model name or family
    #[arg(long)]
    filter: Option<String>,
}

fn main() {
    crate::tracing::init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        ::tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Run(config) => run_aggregate(config),
        Command::Query(config) => {
            let out = run_query(config)?;
            print!("{out}");
            Ok(())
        }
    }
}

fn run_aggregate(config: &RunConfig) -> Result<(), String> {
    let loaded = load_run_records(&config.input_dir).map_err(|e| e.to_string())?;
    if !loaded.skipped_files.is_empty() {
        ::tracing::warn!(
            "{} report file(s) could not be parsed",
            loaded.skipped_files.len()
        );
    }

    let entries = if config.fail_on_invalid {
        aggregate_strict(&loaded.records).map_err(|e| e.to_string())?
    } else {
        aggregate(&loaded.records).entries
    };

    write_db(&entries, &config.out_path).map_err(|e| e.to_string())?;
    if let Some(path) = &config.summary {
        write_summary(&entries, path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn run_query(config: &QueryConfig) -> Result<String, String> {
    let entries = read_db(&config.db_path).map_err(|e| e.to_string())?;

    if let Some(id) = &config.id {
        let entry =
            find_by_id(&entries, id).ok_or_else(|| format!("no model with id `{id}`"))?;
        let mut out = serde_json::to_string_pretty(entry).map_err(|e| e.to_string())?;
        out.push('\n');
        return Ok(out);
    }

    let selected = match &config.filter {
        Some(text) => filter_entries(&entries, text)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>(),
        None => entries,
    };
    Ok(render_leaderboard_text(&selected))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
