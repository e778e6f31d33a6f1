//! Error types and handling infrastructure for table to JSON conversion

use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("No {extension} files found in {}", dir.display())]
    NoInputFiles { dir: PathBuf, extension: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV parse error: {message}")]
    TextParse {
        message: String,
        line: Option<u64>,
    },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("Workbook error: {message}")]
    Workbook {
        message: String,
        sheet: Option<String>,
    },

    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn text_parse(message: String, line: Option<u64>) -> Self {
        Self::TextParse { message, line }
    }

    pub fn workbook(message: String, sheet: Option<String>) -> Self {
        Self::Workbook { message, sheet }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion { kind: ConversionErrorKind },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }

    pub fn no_input_files(dir: PathBuf, extension: &str) -> Self {
        Self::conversion(ConversionErrorKind::NoInputFiles {
            dir,
            extension: extension.to_string(),
        })
    }

    pub fn io_at(err: std::io::Error, path: PathBuf) -> Self {
        Self::conversion(ConversionErrorKind::io(err.to_string(), Some(path)))
    }

    pub fn workbook_sheet(message: String, sheet: &str) -> Self {
        Self::conversion(ConversionErrorKind::workbook(message, Some(sheet.to_string())))
    }

    /// The underlying kind, if this error came from the conversion pipeline
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind } => Some(kind),
            Self::Other(_) => None,
        }
    }

    /// True when the batch found nothing to convert
    pub fn is_no_input(&self) -> bool {
        matches!(self.kind(), Some(ConversionErrorKind::NoInputFiles { .. }))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind } => match kind {
                ConversionErrorKind::NoInputFiles { dir, extension } => {
                    format!("Could not find any {} files in {}", extension, dir.display())
                }
                ConversionErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("{} ({})", message, path.display()),
                ConversionErrorKind::TextParse {
                    message,
                    line: Some(line),
                } => format!("CSV parse error at line {}: {}", line, message),
                ConversionErrorKind::Workbook {
                    message,
                    sheet: Some(sheet),
                } => format!("Workbook error in sheet '{}': {}", sheet, message),
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::conversion(ConversionErrorKind::io(err.to_string(), None))
    }
}

impl From<walkdir::Error> for ConversionError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        Self::conversion(ConversionErrorKind::io(err.to_string(), path))
    }
}

impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());
        let message = match err.kind() {
            csv::ErrorKind::Utf8 { err, .. } => {
                return Self::conversion(ConversionErrorKind::Encoding {
                    message: format!("invalid UTF-8 in field {}", err.field() + 1),
                })
            }
            csv::ErrorKind::Io(io) => io.to_string(),
            _ => err.to_string(),
        };
        Self::conversion(ConversionErrorKind::text_parse(message, line))
    }
}

impl From<std::string::FromUtf8Error> for ConversionError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::conversion(ConversionErrorKind::Encoding {
            message: err.utf8_error().to_string(),
        })
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        Self::conversion(ConversionErrorKind::Serialization {
            message: err.to_string(),
        })
    }
}

impl From<calamine::XlsxError> for ConversionError {
    fn from(err: calamine::XlsxError) -> Self {
        Self::conversion(ConversionErrorKind::workbook(err.to_string(), None))
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
