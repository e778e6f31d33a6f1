use std::path::{Path, PathBuf};

/// Map a table name onto its JSON file inside the output directory.
/// Tables with equal names map to the same file.
pub fn table_output_path(output_dir: &Path, table_name: &str) -> PathBuf {
    output_dir.join(format!("{}.json", table_name))
}
