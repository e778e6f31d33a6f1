//! Row-indexed JSON encoding of parsed tables

pub mod writer;

use serde_json::{Map, Number, Value};

use crate::parser::{CellValue, Table};

pub use writer::{render_table, write_table};

/// Encode a table as `{"0": {col: value, ...}, "1": {...}, ...}`.
///
/// Keys follow row order and values follow column order.
pub fn encode_table(table: &Table) -> Map<String, Value> {
    let mut encoded = Map::new();

    for (index, row) in table.rows().iter().enumerate() {
        let mut object = Map::new();
        for (column, cell) in table.columns().iter().zip(row.iter()) {
            object.insert(column.clone(), cell_to_json(cell));
        }
        encoded.insert(index.to_string(), Value::Object(object));
    }

    encoded
}

/// Convert one cell; floats JSON cannot carry (NaN, infinities) become null
pub fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Null => Value::Null,
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Int(i) => Value::Number((*i).into()),
        CellValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        CellValue::String(s) => Value::String(s.clone()),
    }
}
