//! Counters collected while a batch runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Input files matched by the scan
    pub files_found: usize,
    /// Files whose tables were all written
    pub files_converted: usize,
    /// Files that failed and were skipped
    pub files_failed: usize,
    /// JSON files written (one per table)
    pub tables_written: usize,
    /// Total bytes of JSON written
    pub bytes_written: u64,
    /// Wall time of the batch in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when the batch finished
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self {
            files_found: 0,
            files_converted: 0,
            files_failed: 0,
            tables_written: 0,
            bytes_written: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl BatchSummary {
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            ..Self::default()
        }
    }

    /// Record a file whose tables were written
    pub fn record_file(&mut self, tables: usize, bytes: u64) {
        self.files_converted += 1;
        self.tables_written += tables;
        self.bytes_written += bytes;
    }

    /// Record a file that was skipped after an error
    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }

    /// Stamp the elapsed time and finish time
    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Human-readable report lines
    pub fn report(&self) -> String {
        format!(
            "Files found: {}\nFiles converted: {}\nFiles failed: {}\nJSON files written: {}\nBytes written: {}\nProcessing time: {}",
            self.files_found,
            self.files_converted,
            self.files_failed,
            self.tables_written,
            crate::cli::CliUtils::format_file_size(self.bytes_written),
            crate::cli::CliUtils::format_duration(Duration::from_millis(self.processing_time_ms)),
        )
    }
}
