use std::path::Path;

use crate::conversion::InputFormat;

/// Return true if the path is a file carrying the format's extension
pub fn is_input_file(path: &Path, format: InputFormat) -> bool {
    path.is_file() && has_extension(path, format)
}

/// Extension check only; CSV matches any case, XLSX matches exactly
pub fn has_extension(path: &Path, format: InputFormat) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if format.case_insensitive_extension() {
        ext.eq_ignore_ascii_case(format.extension())
    } else {
        ext == format.extension()
    }
}
