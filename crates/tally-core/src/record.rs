//! Record and summary types — the units of persisted data.
//!
//! A [`Record`] is only ever constructed by [`crate::validate::parse_row`];
//! rows that fail validation never become typed records at all.

use serde::Serialize;

/// One validated service-hour entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
  /// Student name, trimmed. Case-preserved for display; matching is
  /// case-insensitive.
  pub student:  String,
  /// Date in `YYYY-MM-DD` shape. Only the shape is checked — calendar
  /// validity is not ("2024-13-40" is accepted), so the value stays textual.
  pub date:     String,
  /// Non-negative. Zero is accepted here even though entry creation rejects
  /// it; already-persisted data may not have passed the stricter path.
  pub hours:    f64,
  /// Only approved records contribute to totals. Defaults to `false` at
  /// creation; an approval pass is the only post-creation mutation.
  pub approved: bool,
}

impl Record {
  /// A fresh, unapproved entry.
  pub fn new(
    student: impl Into<String>,
    date: impl Into<String>,
    hours: f64,
  ) -> Self {
    Self {
      student:  student.into(),
      date:     date.into(),
      hours,
      approved: false,
    }
  }

  /// The canonical 4-field row encoding (status as `true`/`false`).
  pub fn to_row(&self) -> Vec<String> {
    vec![
      self.student.clone(),
      self.date.clone(),
      self.hours.to_string(),
      self.approved.to_string(),
    ]
  }
}

/// One aggregated `(student, total hours)` pair.
///
/// Summary entries are recomputed from scratch on every aggregation run;
/// they have no identity across runs and are never incrementally patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
  /// Display name — the first-seen casing among the folded entries.
  pub student:     String,
  /// Sum of `hours` over all valid, approved records for this student.
  pub total_hours: f64,
}
