use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{ConversionError, ConversionResult};

/// Render a row index map as pretty JSON text (non-ASCII kept literally)
pub fn render_table(encoded: &Map<String, Value>, indent: &[u8]) -> ConversionResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    encoded.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write `<output_dir>/<name>.json`, replacing any existing file.
///
/// Returns the path written and the number of bytes.
pub fn write_table(
    output_dir: &Path,
    name: &str,
    encoded: &Map<String, Value>,
    indent: &[u8],
) -> ConversionResult<(PathBuf, usize)> {
    let path = crate::cli::path_mapping::table_output_path(output_dir, name);
    let rendered = render_table(encoded, indent)?;

    let file = File::create(&path).map_err(|e| ConversionError::io_at(e, path.clone()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&rendered)
        .and_then(|_| writer.flush())
        .map_err(|e| ConversionError::io_at(e, path.clone()))?;

    Ok((path, rendered.len()))
}
