//! Per-metric daily summaries (`Summaries/<metric>.txt`).
//!
//! Each file holds `{"activities-<metric>": [{"dateTime": .., "value": ..}]}`.
//! Metrics are loaded one column each and outer-joined on the date.

use explorer_core::error::{ExplorerError, Result};
use explorer_core::settings::DataLayout;
use explorer_core::table::{Column, Table, Value};
use explorer_core::time_utils::parse_date;
use serde::Deserialize;
use tracing::debug;

use crate::reader::read_json;

/// Index name of summary tables.
pub const DATE_COLUMN: &str = "dateTime";

#[derive(Debug, Deserialize)]
struct SummaryPoint {
    #[serde(rename = "dateTime")]
    date_time: String,
    value: serde_json::Value,
}

/// Load one metric as a single-column table indexed by date.
pub fn read_summary(layout: &DataLayout, metric: &str) -> Result<Table> {
    let path = layout.summary_file(metric);
    let document = read_json(&path)?;

    let key = format!("activities-{}", metric);
    let series = document
        .get(&key)
        .cloned()
        .ok_or_else(|| ExplorerError::MissingKey {
            path: path.clone(),
            key: key.clone(),
        })?;

    let points: Vec<SummaryPoint> =
        serde_json::from_value(series).map_err(|source| ExplorerError::JsonParse {
            path: path.clone(),
            source,
        })?;

    let table = points_to_table(metric, points)?;
    debug!(
        "Read {} days of {} from {}",
        table.len(),
        metric,
        path.display()
    );
    Ok(table)
}

/// Load several metrics and join them column-wise on the date.
///
/// Dates missing from a metric are `Null` in that metric's column.
pub fn read_and_combine_summaries<S: AsRef<str>>(
    layout: &DataLayout,
    metrics: &[S],
) -> Result<Table> {
    let tables = metrics
        .iter()
        .map(|m| read_summary(layout, m.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Table::concat_columns(tables)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn points_to_table(metric: &str, points: Vec<SummaryPoint>) -> Result<Table> {
    let (dates, values): (Vec<Value>, Vec<Value>) = points
        .into_iter()
        .map(|p| (date_label(&p.date_time), cell(&p.value)))
        .unzip();

    let mut table = Table::from_columns(vec![
        Column::new(DATE_COLUMN, dates),
        Column::new("value", values),
    ])?;
    table.rename_column("value", metric)?;
    table.set_index(DATE_COLUMN)?;
    Ok(table)
}

fn date_label(raw: &str) -> Value {
    parse_date(raw)
        .map(Value::Date)
        .unwrap_or_else(|| Value::Text(raw.to_string()))
}

// Fitbit encodes numeric summaries as strings.
fn cell(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::String(s) => Value::infer(s),
        other => Value::from(other),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
