//! The two batch pipelines: scan a directory, convert each file, report.
//!
//! The CSV pipeline reports a failing file and moves on to the next one.
//! The workbook pipeline stops at the first failure and hands it back to the
//! caller.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{CliUtils, Verbosity};
use crate::conversion::engine::{ConversionEngine, FileOutcome};
use crate::conversion::{BatchSummary, ConversionConfig, ConversionResult, InputFormat};
use crate::error::ConversionError;
use crate::parser::directory::{ensure_output_dir, find_input_files};

/// Convert every CSV file in the input directory.
///
/// Fails only when the output directory cannot be created, the input
/// directory cannot be listed, or no CSV file is found.
pub fn convert_csv_directory(
    config: &ConversionConfig,
    verbosity: Verbosity,
) -> ConversionResult<BatchSummary> {
    let start = Instant::now();
    let files = prepare_batch(config, InputFormat::Csv)?;

    if files.is_empty() {
        return Err(ConversionError::no_input_files(
            config.input_dir.clone(),
            InputFormat::Csv.label(),
        ));
    }

    CliUtils::show_info(
        &format!("Found {} CSV files", files.len()),
        verbosity.quiet,
    );

    let engine = ConversionEngine::new(config.clone());
    let mut summary = BatchSummary::new(files.len());

    for file in &files {
        CliUtils::show_info(&format!("Processing: {}", file.display()), verbosity.quiet);

        match engine.convert_text_file(file) {
            Ok(outcome) => {
                report_outcome(&outcome, verbosity);
                summary.record_file(outcome.tables.len(), outcome.total_bytes());
            }
            Err(e) => {
                CliUtils::show_error(&format!(
                    "Error (file: {}): {}",
                    display_name(file),
                    e.user_message()
                ));
                summary.record_failure();
            }
        }
    }

    CliUtils::show_info("All CSV files have been converted", verbosity.quiet);
    summary.finish(start.elapsed());
    Ok(summary)
}

/// Convert the first sheets of every XLSX workbook in the input directory.
///
/// Finding no workbook is not an error. Any failure ends the batch.
pub fn convert_workbook_directory(
    config: &ConversionConfig,
    verbosity: Verbosity,
) -> ConversionResult<BatchSummary> {
    let start = Instant::now();
    let files = prepare_batch(config, InputFormat::Xlsx)?;

    if !files.is_empty() {
        CliUtils::show_info(
            &format!("Found {} XLSX files", files.len()),
            verbosity.quiet,
        );
    }

    let engine = ConversionEngine::new(config.clone());
    let mut summary = BatchSummary::new(files.len());

    for file in &files {
        CliUtils::show_info(&format!("Processing: {}", file.display()), verbosity.quiet);

        let spinner = CliUtils::create_spinner(
            format!("Reading {}", display_name(file)),
            verbosity.quiet,
        );
        let outcome = engine.convert_workbook(file);
        spinner.finish_and_clear();
        let outcome = outcome?;

        if outcome.skipped_sheets > 0 {
            CliUtils::show_warning(
                &format!(
                    "{}: {} sheets beyond the first {} were not converted",
                    display_name(file),
                    outcome.skipped_sheets,
                    crate::conversion::MAX_WORKBOOK_SHEETS
                ),
                verbosity.quiet,
            );
        }

        report_outcome(&outcome, verbosity);
        summary.record_file(outcome.tables.len(), outcome.total_bytes());
    }

    summary.finish(start.elapsed());
    Ok(summary)
}

/// Create the output directory, then list the matching input files
fn prepare_batch(config: &ConversionConfig, format: InputFormat) -> ConversionResult<Vec<PathBuf>> {
    ensure_output_dir(&config.output_dir)
        .map_err(|e| ConversionError::io_at(e, config.output_dir.clone()))?;

    Ok(find_input_files(&config.input_dir, format, config.recursive)?)
}

fn report_outcome(outcome: &FileOutcome, verbosity: Verbosity) {
    for table in &outcome.tables {
        CliUtils::show_success(
            &format!("JSON written: {}", table.path.display()),
            verbosity.quiet,
        );
        CliUtils::show_detail(
            &format!(
                "{}: {} rows, {} columns, {}",
                table.name,
                table.rows,
                table.columns,
                CliUtils::format_file_size(table.bytes as u64)
            ),
            verbosity,
        );
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
