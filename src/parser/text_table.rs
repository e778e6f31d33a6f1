use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::header::normalize_headers;
use super::inference::type_rows;
use super::{NamedTable, Table};
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

const UTF8_BOM: char = '\u{feff}';

/// Read one CSV file into a table named after the file stem
pub fn read_text_table(path: &Path) -> ConversionResult<NamedTable> {
    let name = table_name(path)?;

    let bytes = fs::read(path).map_err(|e| ConversionError::io_at(e, path.to_path_buf()))?;
    let text = String::from_utf8(bytes)?;

    let table = parse_text_table(&text)?;
    Ok(NamedTable::new(name, table))
}

/// Parse CSV text whose first record is the header
pub fn parse_text_table(text: &str) -> ConversionResult<Table> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let header = reader.headers()?;
    if header.is_empty() {
        return Err(ConversionError::conversion(ConversionErrorKind::text_parse(
            "no columns to parse: file has no header line".to_string(),
            None,
        )));
    }
    let columns = normalize_headers(header.iter());
    let width = columns.len();

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;

        if record.len() > width {
            let line = record.position().map(|pos| pos.line());
            return Err(ConversionError::conversion(ConversionErrorKind::text_parse(
                format!("expected {} fields, saw {}", width, record.len()),
                line,
            )));
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        raw_rows.push(row);
    }

    Table::new(columns, type_rows(width, &raw_rows))
}

fn table_name(path: &Path) -> ConversionResult<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ConversionError::conversion(ConversionErrorKind::io(
                "file name is not valid UTF-8".to_string(),
                Some(path.to_path_buf()),
            ))
        })
}
