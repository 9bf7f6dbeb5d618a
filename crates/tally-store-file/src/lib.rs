//! File backend for the Tally record store.
//!
//! Persists the record set and the summary table as two comma-delimited
//! files on disk. Appends are plain appends; rewrites (the approval pass,
//! the summary) go through a temp-file-then-rename so the previous version
//! is never left half-written.

pub mod error;
mod store;

pub use error::{Error, Result};
pub use store::FileStore;
