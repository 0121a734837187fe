//! Combining same-schema CSV exports into one time-indexed table.

use std::path::Path;

use explorer_core::error::{ExplorerError, Result};
use explorer_core::table::{Table, Value};
use explorer_core::time_utils::to_datetime;
use tracing::debug;

use crate::reader::{find_required_files, FilePattern};

/// Stray index column left behind by an earlier export that wrote its row
/// numbers without a header.
pub const ARTIFACT_COLUMN: &str = "Unnamed: 0";

/// Column holding each row's timestamp.
pub const TIME_COLUMN: &str = "time";

/// Combine every `*.csv` file in `dir` into one table.
///
/// See [`read_files_matching`].
pub fn read_files(dir: &Path) -> Result<Table> {
    read_files_matching(dir, "*.csv")
}

/// Combine every file in `dir` whose name matches `pattern`.
///
/// Files are stacked in path order with their rows in file order. The
/// [`ARTIFACT_COLUMN`] must be present and is dropped; the [`TIME_COLUMN`]
/// is parsed into date-times. Each file keeps its own `0..n` row labels, so
/// the resulting index repeats.
pub fn read_files_matching(dir: &Path, pattern: &str) -> Result<Table> {
    let pattern = FilePattern::new(pattern)?;
    let paths = find_required_files(dir, &pattern)?;

    let tables = paths
        .iter()
        .map(|path| read_csv(path))
        .collect::<Result<Vec<_>>>()?;

    let mut combined = Table::concat_rows(tables)?;
    combined.drop_column(ARTIFACT_COLUMN)?;
    combined.try_map_column(TIME_COLUMN, to_datetime)?;

    debug!(
        "Combined {} CSV files from {} into {} rows",
        paths.len(),
        dir.display(),
        combined.len()
    );
    Ok(combined)
}

/// Read one CSV file: first row is the header, cells are type-inferred and
/// the index is positional.
///
/// Blank header cells are named `Unnamed: <position>` and repeated names get
/// a `.1`, `.2`, ... suffix.
pub fn read_csv(path: &Path) -> Result<Table> {
    let csv_err = |source: csv::Error| ExplorerError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(|source| ExplorerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let header = normalize_headers(reader.headers().map_err(csv_err)?);

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        rows.push(record.iter().map(Value::infer).collect());
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Table::from_rows(header, rows)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn normalize_headers(raw: &csv::StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for (i, name) in raw.iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {}", i)
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while names.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn ts(d: u32, h: u32, m: u32) -> Value {
        Value::DateTime(
            NaiveDate::from_ymd_opt(2017, 4, d)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap(),
        )
    }

    // ── read_csv ─────────────────────────────────────────────────────────────

    #[test]
    fn test_read_csv_names_blank_header() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "heart.csv",
            ",time,value\n0,2017-04-01 00:00:00,61\n1,2017-04-01 00:01:00,\n",
        );

        let t = read_csv(&path).unwrap();
        assert_eq!(t.column_names(), vec!["Unnamed: 0", "time", "value"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0, "value"), Some(&Value::Int(61)));
        assert_eq!(t.get(1, "value"), Some(&Value::Null));
    }

    #[test]
    fn test_read_csv_deduplicates_headers() {
        assert_eq!(
            normalize_headers(&csv::StringRecord::from(vec!["a", "a", "", "a"])),
            vec!["a", "a.1", "Unnamed: 2", "a.2"]
        );
    }

    #[test]
    fn test_read_csv_ragged_row_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "bad.csv", "a,b\n1,2\n3\n");
        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, ExplorerError::CsvParse { .. }));
    }

    // ── read_files ───────────────────────────────────────────────────────────

    #[test]
    fn test_read_files_stacks_all_rows() {
        let dir = TempDir::new().unwrap();
        write_csv(
            dir.path(),
            "a.csv",
            ",time,value\n0,2017-04-01 00:00:00,61\n1,2017-04-01 00:01:00,63\n",
        );
        write_csv(
            dir.path(),
            "b.csv",
            ",time,value\n0,2017-04-02 10:30:00,70\n",
        );
        write_csv(dir.path(), "ignored.txt", "not,a,csv\n");

        let t = read_files(dir.path()).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.column_names(), vec!["time", "value"]);
        assert_eq!(t.get(0, "time"), Some(&ts(1, 0, 0)));
        assert_eq!(t.get(2, "time"), Some(&ts(2, 10, 30)));
        assert_eq!(t.get(2, "value"), Some(&Value::Int(70)));
        assert_eq!(
            t.index().labels,
            vec![Value::Int(0), Value::Int(1), Value::Int(0)]
        );
    }

    #[test]
    fn test_read_files_requires_artifact_column() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "a.csv", "time,value\n2017-04-01 00:00:00,61\n");

        let err = read_files(dir.path()).unwrap_err();
        assert!(matches!(err, ExplorerError::ColumnNotFound(c) if c == ARTIFACT_COLUMN));
    }

    #[test]
    fn test_read_files_bad_time_fails() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "a.csv", ",time,value\n0,not-a-time,61\n");

        let err = read_files(dir.path()).unwrap_err();
        assert!(matches!(err, ExplorerError::TimestampParse(s) if s == "not-a-time"));
    }

    #[test]
    fn test_read_files_no_matches() {
        let dir = TempDir::new().unwrap();
        let err = read_files(dir.path()).unwrap_err();
        assert!(matches!(err, ExplorerError::NoDataFiles { .. }));
    }

    #[test]
    fn test_read_files_matching_custom_pattern() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "heart-1.csv", ",time,bpm\n0,2017-04-01,60\n");
        write_csv(dir.path(), "steps-1.csv", ",time,steps\n0,2017-04-01,100\n");

        let t = read_files_matching(dir.path(), "heart-*.csv").unwrap();
        assert_eq!(t.column_names(), vec!["time", "bpm"]);
        assert_eq!(t.get(0, "time"), Some(&ts(1, 0, 0)));
    }

    #[test]
    fn test_read_files_mismatched_schemas_null_fill() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "a.csv", ",time,bpm\n0,2017-04-01,60\n");
        write_csv(dir.path(), "b.csv", ",time,steps\n0,2017-04-02,100\n");

        let t = read_files(dir.path()).unwrap();
        assert_eq!(t.column_names(), vec!["time", "bpm", "steps"]);
        assert_eq!(t.get(1, "bpm"), Some(&Value::Null));
        assert_eq!(t.get(0, "steps"), Some(&Value::Null));
    }
}
