//! Core types and trait definitions for the Tally service-hours tracker.
//!
//! This crate is deliberately free of file-system and terminal dependencies.
//! All other crates depend on it; it depends on nothing proprietary.
//!
//! The two load-bearing pieces live here: the row validator
//! ([`validate::parse_row`]), which decides what counts as a well-formed
//! entry, and the aggregation engine ([`aggregate::aggregate`]), which folds
//! approved entries into per-student totals.

pub mod aggregate;
pub mod error;
pub mod record;
pub mod store;
pub mod validate;

pub use error::{Field, RowError};
pub use record::{Record, SummaryEntry};
