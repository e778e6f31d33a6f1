//! Configuration options for table to JSON conversion

use std::path::PathBuf;

/// Sheets read per workbook, in workbook order. The cap has no configuration knob.
pub const MAX_WORKBOOK_SHEETS: usize = 10;

/// Default directory scanned for input files
pub const DEFAULT_INPUT_DIR: &str = "DataSheet";

/// Default directory JSON files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "json_output";

/// Input file formats, one per pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated text tables (.csv)
    Csv,
    /// XLSX workbooks (.xlsx)
    Xlsx,
}

impl InputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Xlsx => "xlsx",
        }
    }

    /// CSV files are matched in any case, workbooks only as lower-case `.xlsx`
    pub fn case_insensitive_extension(&self) -> bool {
        matches!(self, InputFormat::Csv)
    }

    /// Label used in console messages
    pub fn label(&self) -> &'static str {
        match self {
            InputFormat::Csv => "CSV",
            InputFormat::Xlsx => "XLSX",
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory scanned for input files
    pub input_dir: PathBuf,
    /// Directory JSON files are written to
    pub output_dir: PathBuf,
    /// Walk subdirectories of the input directory
    pub recursive: bool,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            recursive: false,
            indent_size: 2,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input directory
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Enable/disable recursive scanning
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.input_dir.as_os_str().is_empty() {
            return Err("Input directory must not be empty".to_string());
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory must not be empty".to_string());
        }

        Ok(())
    }

    /// Indentation unit handed to the JSON pretty printer
    pub fn indent(&self) -> Vec<u8> {
        vec![b' '; self.indent_size as usize]
    }
}
