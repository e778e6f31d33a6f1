use std::path::Path;

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};

use super::header::normalize_headers;
use super::{CellValue, NamedTable, Table};
use crate::error::{ConversionError, ConversionResult};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sheets read from one workbook
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookTables {
    pub tables: Vec<NamedTable>,
    /// Sheets past the cap that were not read
    pub skipped_sheets: usize,
}

/// Read up to `max_sheets` sheets of an XLSX workbook, in workbook order.
///
/// The workbook handle is dropped before returning.
pub fn read_workbook(path: &Path, max_sheets: usize) -> ConversionResult<WorkbookTables> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let all_sheets = workbook.sheet_names();
    let skipped_sheets = all_sheets.len().saturating_sub(max_sheets);
    let sheet_names: Vec<String> = all_sheets.into_iter().take(max_sheets).collect();

    let mut tables = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ConversionError::workbook_sheet(e.to_string(), &name))?;
        let table = range_to_table(&range)?;
        tables.push(NamedTable::new(name, table));
    }

    Ok(WorkbookTables {
        tables,
        skipped_sheets,
    })
}

/// Turn a sheet range into a table whose header is the first row.
///
/// Columns count from sheet column A even when the used range starts further
/// right; rows whose cells are all empty are dropped, as blank CSV lines are.
pub fn range_to_table(range: &Range<Data>) -> ConversionResult<Table> {
    let leading_columns = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows().map(|row| {
        let mut cells = vec![CellValue::Null; leading_columns];
        cells.extend(row.iter().map(cell_value));
        cells
    });

    let Some(header) = rows.next() else {
        return Ok(Table::empty());
    };

    let columns = normalize_headers(header.iter().map(CellValue::to_header_text));
    let body = rows
        .filter(|row| !row.iter().all(CellValue::is_null))
        .collect();

    Table::new(columns, body)
}

/// Map a calamine cell onto a typed cell.
///
/// Whole floats become integers; date cells become ISO-8601 text.
pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => float_value(*f),
        Data::String(s) if s.is_empty() => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
        other => match other.as_datetime() {
            Some(dt) => CellValue::String(dt.format(DATETIME_FORMAT).to_string()),
            None => CellValue::String(other.to_string()),
        },
    }
}

fn float_value(f: f64) -> CellValue {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        CellValue::Int(f as i64)
    } else {
        CellValue::Float(f)
    }
}
