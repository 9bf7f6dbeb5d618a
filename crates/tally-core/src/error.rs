//! Error types for `tally-core`.

use thiserror::Error;

/// The four fixed columns of a persisted entry, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Student,
  Date,
  Hours,
  Status,
}

impl std::fmt::Display for Field {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Self::Student => "student name",
      Self::Date => "date",
      Self::Hours => "hours",
      Self::Status => "status",
    };
    f.write_str(name)
  }
}

/// Why a raw row failed validation.
///
/// These are values, not failures: a corrupted row is skipped and reported,
/// never propagated as a panic or an early return from aggregation. The
/// `Display` forms are the operator-facing diagnostic messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
  #[error("missing columns, expected 4 found {0}")]
  MissingColumns(usize),

  #[error("missing or empty {0}")]
  EmptyField(Field),

  #[error("invalid date format")]
  InvalidDateFormat,

  #[error("invalid hours value")]
  InvalidHours,

  #[error("hours cannot be negative")]
  NegativeHours,

  #[error("invalid status")]
  InvalidStatus,
}

pub type Result<T, E = RowError> = std::result::Result<T, E>;
