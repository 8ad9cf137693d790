//! Batch processing of collected files.
//!
//! This module provides:
//! - `Batch`: strips a `FileList` in order, one file per step
//! - `OutputLayout`: where each output file is written
//! - `FileReport` / `BatchSummary`: per-file results and totals

mod errors;
mod output;
mod runner;

pub use errors::{BatchError, BatchResult};
pub use output::OutputLayout;
pub use runner::{Batch, BatchSummary, FileReport};
