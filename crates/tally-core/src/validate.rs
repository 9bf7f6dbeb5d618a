//! Row validation — what counts as a well-formed entry.
//!
//! Checks run in a fixed order and the first violated rule wins, so a row
//! with several bad fields reports a single, specific reason. The functions
//! here are pure and never panic for any input shape; malformed input is a
//! normal return value.

use crate::{
  error::{Field, Result, RowError},
  record::Record,
};

/// Validate a raw row and, on success, build the typed [`Record`].
///
/// Checks, in order:
/// 1. at least 4 fields (student, date, hours, status);
/// 2. each of the four non-empty after trimming, checked student-first;
/// 3. date matches the fixed-width `DDDD-DD-DD` shape (syntactic only);
/// 4. hours parses as a real number and is `>= 0`;
/// 5. status, case-folded, is exactly `true` or `false`.
pub fn parse_row(fields: &[String]) -> Result<Record> {
  if fields.len() < 4 {
    return Err(RowError::MissingColumns(fields.len()));
  }

  let student = fields[0].trim();
  let date = fields[1].trim();
  let hours = fields[2].trim();
  let status = fields[3].trim();

  for (value, field) in [
    (student, Field::Student),
    (date, Field::Date),
    (hours, Field::Hours),
    (status, Field::Status),
  ] {
    if value.is_empty() {
      return Err(RowError::EmptyField(field));
    }
  }

  if !is_date_shaped(date) {
    return Err(RowError::InvalidDateFormat);
  }

  let hours: f64 = hours.parse().map_err(|_| RowError::InvalidHours)?;
  if hours < 0.0 {
    return Err(RowError::NegativeHours);
  }

  let approved = match status.to_ascii_lowercase().as_str() {
    "true" => true,
    "false" => false,
    _ => return Err(RowError::InvalidStatus),
  };

  Ok(Record {
    student: student.to_string(),
    date: date.to_string(),
    hours,
    approved,
  })
}

/// Validate without constructing the record.
pub fn validate(fields: &[String]) -> Result<()> {
  parse_row(fields).map(|_| ())
}

/// Four digits, hyphen, two digits, hyphen, two digits.
/// "2024-13-40" passes — calendar validity is out of scope.
fn is_date_shaped(s: &str) -> bool {
  let bytes = s.as_bytes();
  bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn accepts_well_formed_row() {
    let record =
      parse_row(&row(&["Ann", "2024-01-01", "2.5", "true"])).unwrap();
    assert_eq!(record.student, "Ann");
    assert_eq!(record.date, "2024-01-01");
    assert_eq!(record.hours, 2.5);
    assert!(record.approved);
  }

  #[test]
  fn trims_surrounding_whitespace() {
    let record =
      parse_row(&row(&["  Ann ", " 2024-01-01", " 2 ", " FALSE "])).unwrap();
    assert_eq!(record.student, "Ann");
    assert_eq!(record.hours, 2.0);
    assert!(!record.approved);
  }

  #[test]
  fn rejects_short_rows_regardless_of_content() {
    for fields in [vec![], row(&["Ann"]), row(&["Ann", "2024-01-01", "2"])] {
      let err = validate(&fields).unwrap_err();
      assert!(matches!(err, RowError::MissingColumns(_)));
    }
    assert_eq!(
      validate(&row(&["Ann", "2024-01-01", "2"]))
        .unwrap_err()
        .to_string(),
      "missing columns, expected 4 found 3"
    );
  }

  #[test]
  fn empty_fields_reported_in_column_order() {
    let cases = [
      (row(&["", "", "", ""]), "missing or empty student name"),
      (row(&["Ann", " ", "2", "true"]), "missing or empty date"),
      (row(&["Ann", "2024-01-01", "", "true"]), "missing or empty hours"),
      (row(&["Ann", "2024-01-01", "2", "  "]), "missing or empty status"),
    ];
    for (fields, message) in cases {
      assert_eq!(validate(&fields).unwrap_err().to_string(), message);
    }
  }

  #[test]
  fn date_is_checked_syntactically_only() {
    // Not a real date, but the right shape.
    assert!(validate(&row(&["Ann", "2024-13-40", "2", "true"])).is_ok());

    for bad in ["2024/01/01", "24-01-01", "2024-1-1", "x", "2024-01-011"] {
      assert_eq!(
        validate(&row(&["Ann", bad, "2", "true"]))
          .unwrap_err()
          .to_string(),
        "invalid date format"
      );
    }
  }

  #[test]
  fn hours_must_be_a_non_negative_number() {
    assert!(validate(&row(&["Ann", "2024-01-01", "0", "true"])).is_ok());
    assert_eq!(
      validate(&row(&["Ann", "2024-01-01", "two", "true"]))
        .unwrap_err()
        .to_string(),
      "invalid hours value"
    );
    assert_eq!(
      validate(&row(&["Ann", "2024-01-01", "-1", "true"]))
        .unwrap_err()
        .to_string(),
      "hours cannot be negative"
    );
  }

  #[test]
  fn status_must_be_a_boolean_literal() {
    for ok in ["true", "False", "TRUE", "fAlSe"] {
      assert!(validate(&row(&["Ann", "2024-01-01", "2", ok])).is_ok());
    }
    for bad in ["yes", "1", "approved", "truee"] {
      assert_eq!(
        validate(&row(&["Ann", "2024-01-01", "2", bad]))
          .unwrap_err()
          .to_string(),
        "invalid status"
      );
    }
  }

  #[test]
  fn first_failure_wins() {
    // Empty date outranks the bad hours and bad status that follow it.
    let err = validate(&row(&["Ann", "", "junk", "maybe"])).unwrap_err();
    assert_eq!(err, RowError::EmptyField(Field::Date));
  }

  #[test]
  fn extra_columns_are_tolerated() {
    assert!(
      validate(&row(&["Ann", "2024-01-01", "2", "true", "note"])).is_ok()
    );
  }
}
