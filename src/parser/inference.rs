//! Column typing for text tables.
//!
//! CSV cells arrive as text. A column takes the narrowest type that every
//! non-missing cell in it fits: integer, then float, then boolean, else string.
//! Empty cells and the usual missing-value markers (`NA`, `NaN`, `null`, ...)
//! are always null.

use super::CellValue;

/// Cell texts read as a missing value, in addition to the empty string
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a raw cell stands for a missing value
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty() || MISSING_MARKERS.iter().any(|marker| *marker == raw)
}

/// Inferred type of one CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    /// Pick the narrowest kind that accepts every non-missing cell
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ints = true;
        let mut floats = true;
        let mut bools = true;
        let mut any = false;

        for cell in cells.into_iter().filter(|c| !is_missing(c)) {
            any = true;
            ints = ints && parse_int(cell).is_some();
            floats = floats && parse_float(cell).is_some();
            bools = bools && parse_bool(cell).is_some();
            if !ints && !floats && !bools {
                return ColumnKind::Text;
            }
        }

        if !any {
            ColumnKind::Text
        } else if ints {
            ColumnKind::Int
        } else if floats {
            ColumnKind::Float
        } else if bools {
            ColumnKind::Bool
        } else {
            ColumnKind::Text
        }
    }

    /// Convert one raw cell under this column kind
    pub fn convert(self, raw: &str) -> CellValue {
        if is_missing(raw) {
            return CellValue::Null;
        }

        let typed = match self {
            ColumnKind::Int => parse_int(raw).map(CellValue::Int),
            ColumnKind::Float => parse_float(raw).map(CellValue::Float),
            ColumnKind::Bool => parse_bool(raw).map(CellValue::Bool),
            ColumnKind::Text => None,
        };

        typed.unwrap_or_else(|| CellValue::String(raw.to_string()))
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        s if s.eq_ignore_ascii_case("true") => Some(true),
        s if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Type every column of a block of raw rows.
///
/// All rows must already be as wide as `width`.
pub fn type_rows(width: usize, raw_rows: &[Vec<String>]) -> Vec<Vec<CellValue>> {
    let kinds: Vec<ColumnKind> = (0..width)
        .map(|col| ColumnKind::infer(raw_rows.iter().map(|row| row[col].as_str())))
        .collect();

    raw_rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(kinds.iter())
                .map(|(cell, kind)| kind.convert(cell))
                .collect()
        })
        .collect()
}
