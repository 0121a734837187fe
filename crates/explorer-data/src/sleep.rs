//! Nightly sleep logs.
//!
//! Each export file holds one JSON object with a `sleep` array. Only the
//! first session of a night is kept; the date the device records is the
//! wake-up date, so it is moved back one day to the bed-date.

use std::path::Path;

use explorer_core::error::{ExplorerError, Result};
use explorer_core::settings::DataLayout;
use explorer_core::table::{Column, Table, Value};
use explorer_core::time_utils::{shift_days_back, to_datetime};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::reader::{find_required_files, parse_json, read_text, FilePattern};

/// Output columns, in order.
pub const SLEEP_COLUMNS: [&str; 7] = [
    "time",
    "minutesAsleep",
    "minutesAwake",
    "timeInBed",
    "startTime",
    "endTime",
    "efficiency",
];

// Only the first session is decoded into a `SleepSession`.
#[derive(Debug, Deserialize)]
struct SleepExport {
    sleep: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SleepSession {
    date_of_sleep: String,
    minutes_asleep: i64,
    minutes_awake: i64,
    time_in_bed: i64,
    start_time: String,
    end_time: String,
    efficiency: i64,
}

impl SleepSession {
    fn into_row(self) -> Result<Table> {
        let cells = [
            Value::Text(self.date_of_sleep),
            Value::Int(self.minutes_asleep),
            Value::Int(self.minutes_awake),
            Value::Int(self.time_in_bed),
            Value::Text(self.start_time),
            Value::Text(self.end_time),
            Value::Int(self.efficiency),
        ];
        let columns = SLEEP_COLUMNS
            .iter()
            .zip(cells)
            .map(|(name, cell)| Column::new(*name, vec![cell]))
            .collect();
        Table::from_columns(columns)
    }
}

/// Read every sleep export under `layout.sleep_dir()` into one table with
/// one row per file.
///
/// `time` holds the bed-date (the recorded `dateOfSleep` minus one day);
/// `startTime` and `endTime` are parsed date-times.
pub fn read_sleep(layout: &DataLayout) -> Result<Table> {
    let dir = layout.sleep_dir();
    let pattern = FilePattern::new(DataLayout::SLEEP_PATTERN)?;
    let paths = find_required_files(&dir, &pattern)?;

    let rows = paths
        .iter()
        .map(|path| first_session_row(path))
        .collect::<Result<Vec<_>>>()?;

    let mut combined = Table::concat_rows(rows)?;
    normalize_times(&mut combined)?;

    debug!(
        "Read {} nights of sleep from {}",
        combined.len(),
        dir.display()
    );
    Ok(combined)
}

/// Read one sleep export into a single-row table.
pub fn read_sleep_file(path: &Path) -> Result<Table> {
    let mut row = first_session_row(path)?;
    normalize_times(&mut row)?;
    Ok(row)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn first_session_row(path: &Path) -> Result<Table> {
    let content = read_text(path)?;
    let export: SleepExport = parse_json(path, &content)?;

    let recorded = export.sleep.len();
    let Some(first) = export.sleep.into_iter().next() else {
        return Err(ExplorerError::EmptySleepLog(path.to_path_buf()));
    };
    if recorded > 1 {
        warn!(
            "{} holds {} sleep sessions; keeping the first",
            path.display(),
            recorded
        );
    }

    let session: SleepSession =
        serde_json::from_value(first).map_err(|source| ExplorerError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    session.into_row()
}

fn normalize_times(table: &mut Table) -> Result<()> {
    table.try_map_column("endTime", to_datetime)?;
    table.try_map_column("startTime", to_datetime)?;
    table.try_map_column("time", to_datetime)?;
    table.try_map_column("time", |v| shift_days_back(v, 1))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
