use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::util::{is_scan_match, table_delimiter};

/// Pull the named column out of a headered CSV/TSV table. Blank cells are
/// dropped; a missing column is an error naming the table.
pub(crate) fn load_path_column(
    input: &Path,
    col: &str,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(table_delimiter(input))
        .from_path(input)?;

    let headers = reader.headers()?.clone();
    let Some(col_idx) = headers.iter().position(|h| h.trim() == col) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("column {col:?} not found in {}", input.display()),
        )
        .into());
    };

    let mut roots = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(value) = row.get(col_idx) {
            let value = value.trim();
            if !value.is_empty() {
                roots.push(value.to_string());
            }
        }
    }
    Ok(roots)
}

/// Walk one directory root and return the absolute paths of matching files.
/// A root that does not exist yields nothing; unreadable entries are
/// skipped.
pub(crate) fn scan_root(root: &Path, scan_all: bool) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if !root.exists() {
        return found;
    }
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !is_scan_match(&name, scan_all) {
            continue;
        }
        let path = entry.path();
        found.push(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
    }
    found
}
