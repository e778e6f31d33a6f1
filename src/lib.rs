//! Tabular data to JSON converter
//!
//! Scans a directory for CSV files or XLSX workbooks and writes every table
//! (one per CSV file, one per sheet for the first 10 sheets of a workbook)
//! to `<output_dir>/<table_name>.json` as a row-indexed JSON object.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use cli::Verbosity;
pub use conversion::{
    convert_csv_directory, convert_workbook_directory, BatchSummary, ConversionConfig,
    ConversionEngine, ConversionResult, InputFormat, MAX_WORKBOOK_SHEETS,
};
pub use error::{ConversionError, ConversionErrorKind};
pub use formatter::encode_table;
pub use parser::{CellValue, NamedTable, Table};

/// Convert one in-memory CSV text into row-indexed JSON text with default formatting
pub fn csv_to_json_string(text: &str) -> ConversionResult<String> {
    let table = parser::text_table::parse_text_table(text)?;
    let config = ConversionConfig::default();
    let rendered = formatter::render_table(&encode_table(&table), &config.indent())?;
    Ok(String::from_utf8(rendered)?)
}
