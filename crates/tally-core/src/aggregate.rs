//! The aggregation engine — folds raw rows into per-student totals.
//!
//! Rows stream through the validator one at a time; corrupted rows are
//! collected as diagnostics and skipped, valid-but-unapproved rows are
//! silently excluded, and valid approved rows add their hours to a running
//! total keyed case-insensitively by student name. The whole summary is
//! rebuilt on every call — nothing is incrementally patched, so the totals
//! can never drift from the source record set.

use std::collections::BTreeMap;

use crate::{error::RowError, record::SummaryEntry, validate};

/// One skipped row: its 1-based position in the source and the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
  pub position: usize,
  pub reason:   RowError,
}

/// The result of one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
  /// One entry per distinct student, sorted ascending by name
  /// (case-insensitive).
  pub entries:     Vec<SummaryEntry>,
  /// Corrupted rows in source order. Valid-but-unapproved rows are not
  /// errors and never appear here.
  pub diagnostics: Vec<Diagnostic>,
}

impl Aggregation {
  /// Total hours for one student, case-insensitive. Zero when the student
  /// has no approved entries.
  pub fn total_for(&self, student: &str) -> f64 {
    let key = student.trim().to_lowercase();
    self
      .entries
      .iter()
      .find(|e| e.student.to_lowercase() == key)
      .map_or(0.0, |e| e.total_hours)
  }
}

/// Fold a sequence of raw rows into per-student totals.
///
/// Positions are 1-based in order of appearance. Students are folded
/// case-insensitively; the first-seen casing is kept as the display name.
/// The engine never fails on malformed rows — they route to
/// [`Aggregation::diagnostics`] — and is idempotent for identical input.
pub fn aggregate<I>(rows: I) -> Aggregation
where
  I: IntoIterator<Item = Vec<String>>,
{
  let mut totals: BTreeMap<String, SummaryEntry> = BTreeMap::new();
  let mut diagnostics = Vec::new();

  for (index, row) in rows.into_iter().enumerate() {
    let position = index + 1;
    match validate::parse_row(&row) {
      Err(reason) => diagnostics.push(Diagnostic { position, reason }),
      Ok(record) => {
        if !record.approved {
          continue;
        }
        totals
          .entry(record.student.to_lowercase())
          .and_modify(|entry| entry.total_hours += record.hours)
          .or_insert_with(|| SummaryEntry {
            student:     record.student.clone(),
            total_hours: record.hours,
          });
      }
    }
  }

  Aggregation {
    entries: totals.into_values().collect(),
    diagnostics,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{Field, RowError};

  fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw
      .iter()
      .map(|r| r.iter().map(|s| s.to_string()).collect())
      .collect()
  }

  #[test]
  fn empty_input_yields_empty_summary_and_no_diagnostics() {
    let result = aggregate(Vec::new());
    assert!(result.entries.is_empty());
    assert!(result.diagnostics.is_empty());
  }

  #[test]
  fn folds_case_insensitively_keeping_first_seen_casing() {
    let result = aggregate(rows(&[
      &["Ann", "2024-01-01", "2", "true"],
      &["ann", "2024-01-02", "3", "true"],
      &["Bob", "x", "1", "true"],
      &["Cal", "2024-01-03", "-1", "true"],
    ]));

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].student, "Ann");
    assert_eq!(result.entries[0].total_hours, 5.0);

    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.diagnostics[0].position, 3);
    assert_eq!(result.diagnostics[0].reason, RowError::InvalidDateFormat);
    assert_eq!(result.diagnostics[1].position, 4);
    assert_eq!(result.diagnostics[1].reason, RowError::NegativeHours);
  }

  #[test]
  fn unapproved_rows_neither_count_nor_diagnose() {
    let result = aggregate(rows(&[
      &["Ann", "2024-01-01", "2", "true"],
      &["Ann", "2024-01-02", "4", "false"],
      &["Bob", "2024-01-03", "1", "false"],
    ]));

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].total_hours, 2.0);
    assert!(result.diagnostics.is_empty());
  }

  #[test]
  fn entries_sorted_by_name_case_insensitively() {
    let result = aggregate(rows(&[
      &["zoe", "2024-01-01", "1", "true"],
      &["Ann", "2024-01-01", "1", "true"],
      &["Mia", "2024-01-01", "1", "true"],
    ]));
    let names: Vec<&str> =
      result.entries.iter().map(|e| e.student.as_str()).collect();
    assert_eq!(names, ["Ann", "Mia", "zoe"]);
  }

  #[test]
  fn order_of_rows_does_not_change_totals() {
    let forward = rows(&[
      &["Ann", "2024-01-01", "1.5", "true"],
      &["Bob", "2024-01-02", "2", "true"],
      &["ann", "2024-01-03", "0.5", "true"],
    ]);
    let mut backward = forward.clone();
    backward.reverse();

    let a = aggregate(forward);
    let b = aggregate(backward);
    assert_eq!(a.total_for("ann"), b.total_for("Ann"));
    assert_eq!(a.total_for("bob"), 2.0);
  }

  #[test]
  fn aggregation_is_idempotent() {
    let input = rows(&[
      &["Ann", "2024-01-01", "2", "true"],
      &["Bob", "bad", "1", "true"],
    ]);
    assert_eq!(aggregate(input.clone()), aggregate(input));
  }

  #[test]
  fn blank_row_cites_the_student_field_first() {
    let result = aggregate(rows(&[&["", "", "", ""]]));
    assert!(result.entries.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].position, 1);
    assert_eq!(
      result.diagnostics[0].reason,
      RowError::EmptyField(Field::Student)
    );
  }

  #[test]
  fn zero_field_row_reports_missing_columns() {
    let result = aggregate(vec![Vec::new()]);
    assert_eq!(
      result.diagnostics[0].reason.to_string(),
      "missing columns, expected 4 found 0"
    );
  }

  #[test]
  fn total_for_unknown_student_is_zero() {
    let result = aggregate(rows(&[&["Ann", "2024-01-01", "2", "true"]]));
    assert_eq!(result.total_for("Bob"), 0.0);
    assert_eq!(result.total_for("  ANN  "), 2.0);
  }
}
