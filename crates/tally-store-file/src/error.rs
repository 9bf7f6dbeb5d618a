//! Error type for `tally-store-file`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The record set cannot be located at all. Readers treat this as a hard
  /// failure — no partial summary is ever produced from a missing source.
  #[error("record set not found: {}", path.display())]
  SourceUnavailable { path: PathBuf },

  #[error("i/o error on {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
