//! Per-file conversion: parse, encode, write

use std::path::{Path, PathBuf};

use crate::conversion::config::{ConversionConfig, MAX_WORKBOOK_SHEETS};
use crate::conversion::ConversionResult;
use crate::formatter::{encode_table, write_table};
use crate::parser::text_table::read_text_table;
use crate::parser::workbook::read_workbook;
use crate::parser::NamedTable;

/// One JSON file produced from one table
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenTable {
    pub name: String,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub bytes: usize,
}

/// Everything written for one input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileOutcome {
    pub tables: Vec<WrittenTable>,
    /// Workbook sheets left out by the sheet cap
    pub skipped_sheets: usize,
}

impl FileOutcome {
    pub fn total_bytes(&self) -> u64 {
        self.tables.iter().map(|t| t.bytes as u64).sum()
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
    indent: Vec<u8>,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        let indent = config.indent();
        Self { config, indent }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert one CSV file into one JSON file
    pub fn convert_text_file(&self, path: &Path) -> ConversionResult<FileOutcome> {
        let named = read_text_table(path)?;
        let written = self.write_named_table(&named)?;
        Ok(FileOutcome {
            tables: vec![written],
            skipped_sheets: 0,
        })
    }

    /// Convert the leading sheets of one workbook, one JSON file per sheet
    pub fn convert_workbook(&self, path: &Path) -> ConversionResult<FileOutcome> {
        let contents = read_workbook(path, MAX_WORKBOOK_SHEETS)?;
        let tables = contents
            .tables
            .iter()
            .map(|named| self.write_named_table(named))
            .collect::<ConversionResult<Vec<_>>>()?;

        Ok(FileOutcome {
            tables,
            skipped_sheets: contents.skipped_sheets,
        })
    }

    /// Encode a table and write it under its name
    pub fn write_named_table(&self, named: &NamedTable) -> ConversionResult<WrittenTable> {
        let encoded = encode_table(&named.table);
        let (path, bytes) = write_table(&self.config.output_dir, &named.name, &encoded, &self.indent)?;

        Ok(WrittenTable {
            name: named.name.clone(),
            path,
            rows: named.table.row_count(),
            columns: named.table.column_count(),
            bytes,
        })
    }
}
