//! Subcommand implementations.
//!
//! Each command loads through the [`RecordStore`] abstraction, hands the
//! rows to the core, and reports. Row-level damage never aborts a command;
//! only a missing or unreadable source does.

use std::io::Write as _;

use anyhow::{Context, Result, bail};
use tally_core::{
  aggregate::aggregate, record::Record, store::RecordStore, validate,
};
use tally_csv::format_hours;
use tally_store_file::FileStore;
use tracing::info;

/// `tally add` — validate and append one unapproved entry.
///
/// Stricter than the row validator on purpose: a brand-new entry must have
/// positive hours, while aggregation still accepts zero-hour rows that are
/// already persisted.
pub async fn add(
  store: &FileStore,
  name: &str,
  hours: f64,
  date: Option<String>,
) -> Result<()> {
  let name = name.trim();
  if name.is_empty() {
    bail!("student name is required");
  }
  if !hours.is_finite() || hours <= 0.0 {
    bail!("hours worked must be greater than 0");
  }

  let date = date.unwrap_or_else(|| {
    chrono::Local::now().format("%Y-%m-%d").to_string()
  });
  let record = Record::new(name, date.trim(), hours);

  // Same checks the aggregator applies, so a bad --date can never land in
  // the record set through this path.
  if let Err(reason) = validate::validate(&record.to_row()) {
    bail!("invalid entry: {reason}");
  }

  store.append_record(&record).await?;
  info!(student = %record.student, hours, "entry appended");
  println!(
    "recorded {} hours for {} on {} (pending approval)",
    format_hours(record.hours),
    record.student,
    record.date
  );
  Ok(())
}

/// `tally approve` — walk pending entries, ask for a decision, and rewrite
/// the record set once at the end. Corrupted rows pass through untouched.
pub async fn approve(
  store: &FileStore,
  student: Option<&str>,
  yes: bool,
) -> Result<()> {
  let mut rows = store.load_rows().await?;
  let filter = student.map(|s| s.trim().to_lowercase());

  let mut pending = 0usize;
  let mut approved = 0usize;
  for row in rows.iter_mut() {
    let Ok(record) = validate::parse_row(row) else {
      continue;
    };
    if record.approved {
      continue;
    }
    if let Some(wanted) = &filter
      && record.student.to_lowercase() != *wanted
    {
      continue;
    }

    pending += 1;
    if yes || ask_approval(&record)? {
      // parse_row guaranteed at least four fields.
      row[3] = "true".to_string();
      approved += 1;
      println!("{}'s hours have been approved.", record.student);
    } else {
      println!("{}'s hours remain unapproved.", record.student);
    }
  }

  if approved > 0 {
    store.replace_rows(&rows).await?;
    info!(approved, "record set rewritten");
  }
  if pending == 0 {
    println!("no pending entries.");
  }
  Ok(())
}

fn ask_approval(record: &Record) -> Result<bool> {
  print!(
    "{}: {} hours on {} pending approval. Approve? [y/N] ",
    record.student,
    format_hours(record.hours),
    record.date
  );
  std::io::stdout().flush().context("flushing prompt")?;

  let mut line = String::new();
  std::io::stdin()
    .read_line(&mut line)
    .context("reading approval decision")?;
  Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// `tally report` — aggregate, persist the summary table, print totals, and
/// list skipped rows so an operator can go fix them.
pub async fn report(store: &FileStore, json: bool) -> Result<()> {
  let rows = store.load_rows().await?;
  let result = aggregate(rows);
  store.write_summary(&result.entries).await?;

  if json {
    let skipped: Vec<_> = result
      .diagnostics
      .iter()
      .map(|d| {
        serde_json::json!({ "row": d.position, "reason": d.reason.to_string() })
      })
      .collect();
    let out =
      serde_json::json!({ "summary": result.entries, "skipped": skipped });
    println!("{}", serde_json::to_string_pretty(&out)?);
    return Ok(());
  }

  if result.entries.is_empty() {
    println!("no approved hours recorded.");
  }
  for entry in &result.entries {
    println!(
      "{}: {} hours",
      entry.student,
      format_hours(entry.total_hours)
    );
  }
  if !result.diagnostics.is_empty() {
    eprintln!(
      "warning: skipped {} corrupted row(s):",
      result.diagnostics.len()
    );
    for d in &result.diagnostics {
      eprintln!("  row {}: {}", d.position, d.reason);
    }
  }
  println!("summary written to {}", store.summary_path().display());
  Ok(())
}

/// `tally check` — report every corrupted row with its position, reason,
/// and raw contents. Reporting, not failing: always exits zero.
pub async fn check(store: &FileStore) -> Result<()> {
  let rows = store.load_rows().await?;

  let mut corrupted = 0usize;
  for (index, row) in rows.iter().enumerate() {
    if let Err(reason) = validate::validate(row) {
      corrupted += 1;
      println!("row {}: {} {:?}", index + 1, reason, row);
    }
  }

  if corrupted == 0 {
    println!("no corrupted rows ({} checked).", rows.len());
  } else {
    println!("{corrupted} corrupted row(s) of {}.", rows.len());
  }
  Ok(())
}

/// `tally total` — the aggregated total for one student, case-insensitive.
pub async fn total(store: &FileStore, name: &str) -> Result<()> {
  let rows = store.load_rows().await?;
  let result = aggregate(rows);
  println!(
    "{}: {} hours",
    name.trim(),
    format_hours(result.total_for(name))
  );
  Ok(())
}
