//! Lenient comma-delimited reader.
//!
//! Pipeline:
//!   raw &str
//!     └─ parse_rows()  → Vec<Vec<String>>  (never fails)
//!
//! Conventions honoured: `"`-quoted fields may contain delimiters, line
//! breaks, and doubled quotes; CRLF and bare LF both end a record; a blank
//! line yields a zero-field row (which the validator then reports as
//! missing columns). An unterminated quote runs to end of input rather than
//! aborting the whole read.

/// Split `input` into records of fields.
pub fn parse_rows(input: &str) -> Vec<Vec<String>> {
  let mut rows: Vec<Vec<String>> = Vec::new();
  let mut row: Vec<String> = Vec::new();
  let mut field = String::new();
  // A quoted empty field ("") is a field; a truly blank line is not.
  let mut field_opened = false;
  let mut in_quotes = false;

  let mut chars = input.chars().peekable();
  while let Some(c) = chars.next() {
    if in_quotes {
      if c == '"' {
        if chars.peek() == Some(&'"') {
          chars.next();
          field.push('"');
        } else {
          in_quotes = false;
        }
      } else {
        field.push(c);
      }
      continue;
    }

    match c {
      '"' if field.is_empty() && !field_opened => {
        in_quotes = true;
        field_opened = true;
      }
      // A quote mid-field is taken literally rather than rejected.
      '"' => field.push('"'),
      ',' => {
        row.push(std::mem::take(&mut field));
        field_opened = false;
      }
      '\r' => {
        if chars.peek() == Some(&'\n') {
          chars.next();
        }
        end_record(&mut rows, &mut row, &mut field, &mut field_opened);
      }
      '\n' => end_record(&mut rows, &mut row, &mut field, &mut field_opened),
      _ => field.push(c),
    }
  }

  // Final record without a trailing newline.
  if !row.is_empty() || !field.is_empty() || field_opened {
    row.push(field);
    rows.push(row);
  }

  rows
}

fn end_record(
  rows: &mut Vec<Vec<String>>,
  row: &mut Vec<String>,
  field: &mut String,
  field_opened: &mut bool,
) {
  if row.is_empty() && field.is_empty() && !*field_opened {
    // Blank line: a record with no fields at all.
    rows.push(Vec::new());
  } else {
    row.push(std::mem::take(field));
    rows.push(std::mem::take(row));
  }
  *field_opened = false;
}
