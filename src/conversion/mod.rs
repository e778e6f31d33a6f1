//! Table to JSON conversion module
//!
//! This module contains the batch drivers, per-file engine, configuration, and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConversionConfig, InputFormat, MAX_WORKBOOK_SHEETS};

pub use batch::{convert_csv_directory, convert_workbook_directory};
pub use engine::{ConversionEngine, FileOutcome, WrittenTable};
pub use stats::BatchSummary;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, crate::error::ConversionError>;
