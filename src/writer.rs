use std::io;
use std::path::{Path, PathBuf};

use crate::manifest::Record;

pub(crate) fn full_list_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_full_list.csv"))
}

pub(crate) fn group_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}_group_{index:03}.csv"))
}

/// Serialize records as headerless CSV rows, mirroring the manifest input
/// contract so artifacts can be fed back through `load_manifest`.
pub(crate) fn write_records(path: &Path, records: &[Record]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    write_rows(&mut writer, records)
}

pub(crate) fn write_records_to<W: io::Write>(
    out: W,
    records: &[Record],
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    write_rows(&mut writer, records)
}

fn write_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[Record],
) -> Result<(), csv::Error> {
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::load_manifest;
    use std::fs;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir()
            .join("parceler_test")
            .join(format!("writer_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn rec(path: &str, size: u64) -> Record {
        Record {
            path: path.to_string(),
            size,
            hash: Some("abc123".to_string()),
        }
    }

    #[test]
    fn artifact_naming_is_zero_padded_and_one_based() {
        assert_eq!(full_list_path("result"), PathBuf::from("result_full_list.csv"));
        assert_eq!(group_path("result", 1), PathBuf::from("result_group_001.csv"));
        assert_eq!(group_path("result", 42), PathBuf::from("result_group_042.csv"));
        assert_eq!(group_path("result", 1000), PathBuf::from("result_group_1000.csv"));
    }

    #[test]
    fn prefix_may_carry_a_directory() {
        assert_eq!(
            group_path("out/batch", 3),
            PathBuf::from("out/batch_group_003.csv")
        );
    }

    #[test]
    fn written_records_load_back_unchanged() {
        let path = temp_dir().join("roundtrip.csv");
        let records = vec![rec("/data/a.fq.gz", 100), rec("/data/b.fq.gz", 200)];
        write_records(&path, &records).unwrap();
        assert_eq!(load_manifest(&path).unwrap(), records);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_hash_writes_empty_cell() {
        let mut out = Vec::new();
        let records = vec![Record {
            path: "/data/a.fq.gz".to_string(),
            size: 7,
            hash: None,
        }];
        write_records_to(&mut out, &records).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/data/a.fq.gz,7,\n");
    }

    #[test]
    fn empty_record_list_writes_empty_file() {
        let path = temp_dir().join("empty.csv");
        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        fs::remove_file(&path).ok();
    }
}
