//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tally-store-file`).
//! The CLI depends on this abstraction, not on any concrete backend. The
//! core itself never performs I/O; it only defines the seam.

use std::future::Future;

use crate::record::{Record, SummaryEntry};

/// Abstraction over a persisted record set and its summary table.
///
/// Record writes are append-only except for the approval pass, which
/// rewrites the whole set in one shot via [`RecordStore::replace_rows`].
/// Per-row damage is never a store error — corrupted rows come back from
/// [`RecordStore::load_rows`] like any other row and are the validator's
/// concern. Store errors mean the *source* is unreachable or unwritable.
///
/// All methods return `Send` futures so the trait works on multi-threaded
/// async runtimes.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All raw rows of the record set, in file order.
  ///
  /// Fails only when the whole source is unreachable (e.g. the file does
  /// not exist); never on a per-row basis.
  fn load_rows(
    &self,
  ) -> impl Future<Output = Result<Vec<Vec<String>>, Self::Error>> + Send + '_;

  /// Append one entry, creating the record set if it does not exist yet.
  fn append_record<'a>(
    &'a self,
    record: &'a Record,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Replace the entire record set with `rows`, atomically relative to the
  /// previous version.
  fn replace_rows<'a>(
    &'a self,
    rows: &'a [Vec<String>],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Persist the summary table (header plus one row per entry),
  /// atomically relative to the previous version.
  fn write_summary<'a>(
    &'a self,
    entries: &'a [SummaryEntry],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
