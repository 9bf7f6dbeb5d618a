//! Canonical comma-delimited writer and summary rendering.

use tally_core::record::SummaryEntry;

/// Header of the persisted summary table.
pub const SUMMARY_HEADER: [&str; 2] = ["Student Name", "Total Hours"];

/// Encode rows as comma-delimited text with LF line endings.
///
/// Fields containing the delimiter, a quote, or a line break are quoted,
/// with quotes doubled. Round-trips through [`crate::parse_rows`].
pub fn write_rows(rows: &[Vec<String>]) -> String {
  let mut out = String::new();
  for row in rows {
    push_row(&mut out, row.iter().map(String::as_str));
  }
  out
}

/// Render the summary table: the header row, then one row per entry.
///
/// Entries are written in the order given (the aggregation engine already
/// sorts them). Integral totals are rendered with one decimal place so the
/// output stays stable ("5.0", not "5"); fractional totals keep full
/// precision.
pub fn write_summary(entries: &[SummaryEntry]) -> String {
  let mut out = String::new();
  push_row(&mut out, SUMMARY_HEADER.into_iter());
  for entry in entries {
    let hours = format_hours(entry.total_hours);
    push_row(&mut out, [entry.student.as_str(), hours.as_str()].into_iter());
  }
  out
}

/// Render an hour total as a decimal number ("5.0", "2.5").
pub fn format_hours(hours: f64) -> String {
  if hours.fract() == 0.0 && hours.is_finite() {
    format!("{hours:.1}")
  } else {
    hours.to_string()
  }
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
  let mut first = true;
  for field in fields {
    if !first {
      out.push(',');
    }
    first = false;
    push_field(out, field);
  }
  out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
  if field.contains(['"', ',', '\n', '\r']) {
    out.push('"');
    for c in field.chars() {
      if c == '"' {
        out.push('"');
      }
      out.push(c);
    }
    out.push('"');
  } else {
    out.push_str(field);
  }
}

#[cfg(test)]
mod tests {
  use tally_core::record::Record;

  use super::*;

  #[test]
  fn plain_rows_round_trip() {
    let rows = vec![
      Record::new("Ann", "2024-01-01", 2.5).to_row(),
      Record::new("Bob", "2024-01-02", 3.0).to_row(),
    ];
    let text = write_rows(&rows);
    assert_eq!(text, "Ann,2024-01-01,2.5,false\nBob,2024-01-02,3,false\n");
    assert_eq!(crate::parse_rows(&text), rows);
  }

  #[test]
  fn awkward_fields_are_quoted() {
    let rows = vec![vec![
      "Lee, Jr.".to_string(),
      "say \"hi\"".to_string(),
      "two\nlines".to_string(),
    ]];
    let text = write_rows(&rows);
    assert_eq!(text, "\"Lee, Jr.\",\"say \"\"hi\"\"\",\"two\nlines\"\n");
    assert_eq!(crate::parse_rows(&text), rows);
  }

  #[test]
  fn summary_has_header_and_decimal_totals() {
    let entries = vec![
      SummaryEntry {
        student:     "Ann".to_string(),
        total_hours: 5.0,
      },
      SummaryEntry {
        student:     "Bob".to_string(),
        total_hours: 2.5,
      },
    ];
    assert_eq!(
      write_summary(&entries),
      "Student Name,Total Hours\nAnn,5.0\nBob,2.5\n"
    );
  }

  #[test]
  fn empty_summary_is_just_the_header() {
    assert_eq!(write_summary(&[]), "Student Name,Total Hours\n");
  }

  #[test]
  fn hours_formatting() {
    assert_eq!(format_hours(5.0), "5.0");
    assert_eq!(format_hours(0.0), "0.0");
    assert_eq!(format_hours(2.5), "2.5");
    assert_eq!(format_hours(0.75), "0.75");
  }
}
