use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::conversion::InputFormat;

/// Find input files of the given format in a directory, sorted by file name.
/// If recursive is true every subdirectory is walked; otherwise only direct children.
pub fn find_input_files(
    dir: &Path,
    format: InputFormat,
    recursive: bool,
) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if crate::parser::filter::is_input_file(path, format) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
