//! `tally` — CLI for the Tally service-hours tracker.
//!
//! # Usage
//!
//! ```
//! tally add "Ann Lee" --hours 2.5
//! tally approve --student ann
//! tally report
//! tally check
//! tally total ann
//! ```
//!
//! Data lives in two comma-delimited files: the record set (one row per
//! entry, appended by `add`, rewritten only by `approve`) and the summary
//! table (rebuilt from scratch by every `report`).

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tally_store_file::FileStore;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tally", about = "Track, approve, and total service hours")]
struct Args {
  /// Path to a TOML config file (records_path, summary_path).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Record set file (default: service_hours.csv).
  #[arg(long, env = "TALLY_RECORDS", value_name = "FILE")]
  records: Option<PathBuf>,

  /// Summary file (default: total_hours.csv).
  #[arg(long, env = "TALLY_SUMMARY", value_name = "FILE")]
  summary: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Append a new, unapproved entry to the record set.
  Add {
    /// Student name.
    name: String,

    /// Service hours worked; must be greater than zero.
    #[arg(long)]
    hours: f64,

    /// Date of service (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<String>,
  },

  /// Review pending entries and mark accepted ones approved.
  Approve {
    /// Only review entries for this student (case-insensitive).
    #[arg(long)]
    student: Option<String>,

    /// Approve everything pending without prompting.
    #[arg(long)]
    yes: bool,
  },

  /// Aggregate approved hours, write the summary file, and print totals.
  Report {
    /// Emit JSON instead of the table.
    #[arg(long)]
    json: bool,
  },

  /// List corrupted rows without aggregating.
  Check,

  /// Print the total approved hours for one student.
  Total {
    /// Student name (case-insensitive).
    name: String,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  records_path: String,
  #[serde(default)]
  summary_path: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let records = args
    .records
    .or_else(|| {
      (!file_cfg.records_path.is_empty())
        .then(|| PathBuf::from(&file_cfg.records_path))
    })
    .unwrap_or_else(|| PathBuf::from("service_hours.csv"));
  let summary = args
    .summary
    .or_else(|| {
      (!file_cfg.summary_path.is_empty())
        .then(|| PathBuf::from(&file_cfg.summary_path))
    })
    .unwrap_or_else(|| PathBuf::from("total_hours.csv"));

  debug!(
    records = %records.display(),
    summary = %summary.display(),
    "resolved data paths"
  );

  let store = FileStore::new(records, summary);

  match args.command {
    Command::Add { name, hours, date } => {
      commands::add(&store, &name, hours, date).await
    }
    Command::Approve { student, yes } => {
      commands::approve(&store, student.as_deref(), yes).await
    }
    Command::Report { json } => commands::report(&store, json).await,
    Command::Check => commands::check(&store).await,
    Command::Total { name } => commands::total(&store, &name).await,
  }
}
