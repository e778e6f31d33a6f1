//! Header row normalisation shared by CSV and workbook tables

use std::collections::HashSet;

/// Turn raw header cells into unique column names.
///
/// Blank cells become `Unnamed: <index>`. A name that was already taken gets
/// the first free `.1`, `.2`, ... suffix, so `a,a,a` reads as `a, a.1, a.2`.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::new();

    for (index, cell) in raw.into_iter().enumerate() {
        let base = match cell.as_ref() {
            "" => format!("Unnamed: {}", index),
            name => name.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        seen.insert(name.clone());
        columns.push(name);
    }

    columns
}
