use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::table_delimiter;

/// One manifest row: a file path, its byte size, and an optional content
/// digest. The grouper never interprets `path` or `hash`; only `size`
/// participates in the packing decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Record {
    pub(crate) path: String,
    pub(crate) size: u64,
    pub(crate) hash: Option<String>,
}

#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("manifest record {row} is malformed (expected path,size,hash with a non-negative integer size): {source}")]
    BadRecord {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Load a headerless manifest of `path,size,hash` rows. Any malformed row
/// (missing fields, negative or non-numeric size) fails the whole load with
/// its 1-based row number; no partial result is returned.
pub(crate) fn load_manifest(path: &Path) -> Result<Vec<Record>, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(table_delimiter(path))
        .from_reader(file);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<Record>().enumerate() {
        let record = row.map_err(|source| ManifestError::BadRecord {
            row: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Stat and hash each listed file into a manifest record. The hash is a
/// streaming blake3 of the file content; the size is the byte count actually
/// hashed, so the two always agree even if the file changes between listing
/// and manifesting.
pub(crate) fn collect_records(paths: &[String]) -> Result<Vec<Record>, ManifestError> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let io_err = |source| ManifestError::Io {
            path: path.clone(),
            source,
        };
        let mut file = File::open(path).map_err(io_err)?;
        let mut hasher = blake3::Hasher::new();
        let size = io::copy(&mut file, &mut hasher).map_err(io_err)?;
        records.push(Record {
            path: path.clone(),
            size,
            hash: Some(hasher.finalize().to_hex().to_string()),
        });
    }
    Ok(records)
}
