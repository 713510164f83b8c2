use std::ffi::OsStr;
use std::io;
use std::path::Path;

pub(crate) const BYTES_PER_TB: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

pub(crate) const DEFAULT_SCAN_SUFFIX: &str = ".fq.gz";

/// Convert a terabyte limit to bytes, rejecting anything that is not a
/// positive finite number (or that rounds down to zero bytes).
pub(crate) fn tb_to_bytes(limit_tb: f64) -> Result<u64, Box<dyn std::error::Error>> {
    if !limit_tb.is_finite() || limit_tb <= 0.0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("--limit-tb must be a positive number, got {limit_tb}"),
        )
        .into());
    }
    let bytes = (limit_tb * BYTES_PER_TB) as u64;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("--limit-tb {limit_tb} is below one byte"),
        )
        .into());
    }
    Ok(bytes)
}

pub(crate) fn is_scan_match(file_name: &str, scan_all: bool) -> bool {
    scan_all || file_name.ends_with(DEFAULT_SCAN_SUFFIX)
}

/// Tables ending in .csv are comma-separated; everything else is read as
/// tab-separated.
pub(crate) fn table_delimiter(path: &Path) -> u8 {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => b',',
        _ => b'\t',
    }
}
