//! Comma-delimited codec for Tally.
//!
//! Converts between raw text and field rows, and renders the canonical
//! summary table. Pure synchronous; no file-system dependencies.
//!
//! The reader is deliberately lenient: it never fails. Row-level damage
//! (wrong field counts, garbage values) is the validator's concern in
//! `tally-core`; a row that looks odd here still comes out as a row so the
//! aggregation engine can diagnose it with a position and a reason.
//!
//! # Quick start
//!
//! ```
//! let rows = tally_csv::parse_rows("Ann,2024-01-01,2,true\n");
//! assert_eq!(rows, vec![vec!["Ann", "2024-01-01", "2", "true"]]);
//! ```

mod parse;
mod serialize;

pub use parse::parse_rows;
pub use serialize::{format_hours, write_rows, write_summary};
