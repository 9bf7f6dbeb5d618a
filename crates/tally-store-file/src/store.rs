//! [`FileStore`] — the on-disk implementation of [`RecordStore`].

use std::path::{Path, PathBuf};

use tally_core::{
  record::{Record, SummaryEntry},
  store::RecordStore,
};
use tokio::io::AsyncWriteExt;

use crate::{Error, Result};

/// A record store backed by two comma-delimited files: the append-only
/// record set and the fully-rewritten summary table.
#[derive(Debug, Clone)]
pub struct FileStore {
  records_path: PathBuf,
  summary_path: PathBuf,
}

impl FileStore {
  pub fn new(
    records_path: impl Into<PathBuf>,
    summary_path: impl Into<PathBuf>,
  ) -> Self {
    Self {
      records_path: records_path.into(),
      summary_path: summary_path.into(),
    }
  }

  pub fn records_path(&self) -> &Path {
    &self.records_path
  }

  pub fn summary_path(&self) -> &Path {
    &self.summary_path
  }

  fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  /// Write `contents` to a sibling temp file, then rename over `path`.
  /// The rename makes the replacement atomic relative to the old version.
  async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, contents)
      .await
      .map_err(|e| Self::io_error(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
      .await
      .map_err(|e| Self::io_error(path, e))?;
    Ok(())
  }
}

impl RecordStore for FileStore {
  type Error = Error;

  async fn load_rows(&self) -> Result<Vec<Vec<String>>> {
    let raw = match tokio::fs::read_to_string(&self.records_path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        return Err(Error::SourceUnavailable {
          path: self.records_path.clone(),
        });
      }
      Err(e) => return Err(Self::io_error(&self.records_path, e)),
    };
    Ok(tally_csv::parse_rows(&raw))
  }

  async fn append_record(&self, record: &Record) -> Result<()> {
    let line = tally_csv::write_rows(&[record.to_row()]);

    let mut file = tokio::fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.records_path)
      .await
      .map_err(|e| Self::io_error(&self.records_path, e))?;

    file
      .write_all(line.as_bytes())
      .await
      .map_err(|e| Self::io_error(&self.records_path, e))?;
    file
      .flush()
      .await
      .map_err(|e| Self::io_error(&self.records_path, e))?;
    Ok(())
  }

  async fn replace_rows(&self, rows: &[Vec<String>]) -> Result<()> {
    Self::write_atomic(&self.records_path, &tally_csv::write_rows(rows)).await
  }

  async fn write_summary(&self, entries: &[SummaryEntry]) -> Result<()> {
    Self::write_atomic(&self.summary_path, &tally_csv::write_summary(entries))
      .await
  }
}
