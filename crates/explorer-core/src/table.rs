//! In-memory tabular record set shared by every loader.
//!
//! A [`Table`] is a set of named [`Column`]s plus a row [`Index`]. Loaders
//! build tables from CSV rows or JSON records, and the shaping helpers
//! (concatenation, index promotion, null counting) operate on them.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ExplorerError, Result};

/// Strings treated as missing when inferring CSV cells.
const NA_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A",
    "<NA>",
];

// ── Value ─────────────────────────────────────────────────────────────────────

/// A single table cell.
#[derive(Debug, Clone)]
pub enum Value {
    /// A missing value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// `true` for [`Value::Null`] only.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Infer a typed value from a raw CSV cell.
    ///
    /// Missing markers become `Null`, then integers, floats and booleans are
    /// tried in that order. Dates are left as text; time columns are parsed
    /// explicitly by the loaders.
    pub fn infer(raw: &str) -> Value {
        let trimmed = raw.trim();
        if NA_MARKERS.contains(&trimmed) {
            return Value::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
        match trimmed {
            "True" | "true" => Value::Bool(true),
            "False" | "false" => Value::Bool(false),
            _ => Value::Text(raw.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::Text(_) => 4,
            Value::Date(_) => 5,
            Value::DateTime(_) => 6,
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            JsonValue::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }
}

// Total order: variant rank first, then the payload. Floats use `total_cmp`
// so the order stays total in the presence of NaN.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NaN"),
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

// ── Column ────────────────────────────────────────────────────────────────────

/// A named sequence of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of `Null` cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

/// Row labels of a table.
///
/// A positional index has no name and labels `0..n`. Stacking positional
/// tables keeps each source's labels, so labels are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Index {
    pub name: Option<String>,
    pub labels: Vec<Value>,
}

impl Index {
    /// A fresh `0..len` positional index.
    pub fn positional(len: usize) -> Self {
        Self {
            name: None,
            labels: (0..len as i64).map(Value::Int).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn first_duplicate(&self) -> Option<&Value> {
        let mut sorted: Vec<&Value> = self.labels.iter().collect();
        sorted.sort();
        sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Named columns of equal length keyed by a row [`Index`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    index: Index,
    columns: Vec<Column>,
}

impl Table {
    /// An empty table with a positional index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns of equal length with a positional index.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let len = columns.first().map(|c| c.values.len()).unwrap_or(0);
        Self::with_index_and_columns(Index::positional(len), columns)
    }

    /// Build a table from a header and row-major cells.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ExplorerError::ShapeMismatch(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        Self::from_columns(columns)
    }

    /// Build a table with an explicit index, validating lengths and names.
    pub fn with_index_and_columns(index: Index, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if column.values.len() != index.len() {
                return Err(ExplorerError::ShapeMismatch(format!(
                    "column \"{}\" has {} values, index has {}",
                    column.name,
                    column.values.len(),
                    index.len()
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ExplorerError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { index, columns })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of regular (non-index) columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cell at `row` in column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        self.column(name).and_then(|c| c.values.get(row))
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| ExplorerError::ColumnNotFound(name.to_string()))
    }

    // ── Column edits ─────────────────────────────────────────────────────────

    /// Remove and return the named column.
    pub fn drop_column(&mut self, name: &str) -> Result<Column> {
        let pos = self.position(name)?;
        Ok(self.columns.remove(pos))
    }

    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        let pos = self.position(from)?;
        if from != to && self.column(to).is_some() {
            return Err(ExplorerError::DuplicateColumn(to.to_string()));
        }
        self.columns[pos].name = to.to_string();
        Ok(())
    }

    /// Replace every cell of a column with `f(cell)`, failing on the first error.
    pub fn try_map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        let pos = self.position(name)?;
        let mapped = self.columns[pos]
            .values
            .iter()
            .map(&mut f)
            .collect::<Result<Vec<_>>>()?;
        self.columns[pos].values = mapped;
        Ok(())
    }

    // ── Index edits ──────────────────────────────────────────────────────────

    /// Promote the named column to the row index, removing it from the
    /// regular columns. The previous index is discarded.
    pub fn set_index(&mut self, name: &str) -> Result<()> {
        let column = self.drop_column(name)?;
        self.index = Index {
            name: Some(column.name),
            labels: column.values,
        };
        Ok(())
    }

    /// Restore a `0..n` positional index.
    ///
    /// A named index goes back to being the first regular column; an unnamed
    /// one is discarded.
    pub fn reset_index(&mut self) {
        let len = self.len();
        let old = std::mem::replace(&mut self.index, Index::positional(len));
        if let Some(name) = old.name {
            self.columns.insert(0, Column::new(name, old.labels));
        }
    }

    /// Owned form of [`Table::set_index`].
    pub fn with_index(mut self, name: &str) -> Result<Self> {
        self.set_index(name)?;
        Ok(self)
    }

    /// Owned form of [`Table::reset_index`].
    pub fn with_reset_index(mut self) -> Self {
        self.reset_index();
        self
    }

    // ── Reshaping ────────────────────────────────────────────────────────────

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Table {
        let n = n.min(self.len());
        Table {
            index: Index {
                name: self.index.name.clone(),
                labels: self.index.labels[..n].to_vec(),
            },
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.values[..n].to_vec()))
                .collect(),
        }
    }

    /// Missing-value count per column, in column order.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.null_count()))
            .collect()
    }

    /// Stack tables vertically.
    ///
    /// The result holds the union of all column names in first-appearance
    /// order; a source lacking a column contributes `Null` cells for it.
    /// Index labels are carried over unchanged.
    pub fn concat_rows(tables: Vec<Table>) -> Result<Table> {
        if tables.is_empty() {
            return Err(ExplorerError::EmptyConcat);
        }

        let mut names: Vec<String> = Vec::new();
        for table in &tables {
            for column in &table.columns {
                if !names.contains(&column.name) {
                    names.push(column.name.clone());
                }
            }
        }

        let index_name = common_index_name(&tables);
        let total: usize = tables.iter().map(Table::len).sum();
        let mut labels = Vec::with_capacity(total);
        let mut columns: Vec<Column> = names
            .iter()
            .map(|n| Column::new(n.clone(), Vec::with_capacity(total)))
            .collect();

        let sources = tables.len();
        for table in tables {
            let rows = table.len();
            labels.extend(table.index.labels);
            let mut by_name: BTreeMap<String, Vec<Value>> = table
                .columns
                .into_iter()
                .map(|c| (c.name, c.values))
                .collect();
            for column in columns.iter_mut() {
                match by_name.remove(&column.name) {
                    Some(values) => column.values.extend(values),
                    None => column
                        .values
                        .extend(std::iter::repeat(Value::Null).take(rows)),
                }
            }
        }

        debug!(
            "Stacked {} tables into {} rows x {} columns",
            sources,
            total,
            columns.len()
        );

        Table::with_index_and_columns(
            Index {
                name: index_name,
                labels,
            },
            columns,
        )
    }

    /// Join tables side by side on their index (outer join).
    ///
    /// The result index is the sorted union of all labels. When more than one
    /// table is aligned each source's index must be unique; cells a source has
    /// no row for are `Null`. A single table is returned as is.
    pub fn concat_columns(mut tables: Vec<Table>) -> Result<Table> {
        match tables.len() {
            0 => return Err(ExplorerError::EmptyConcat),
            1 => return Ok(tables.remove(0)),
            _ => {}
        }

        for table in &tables {
            if let Some(dup) = table.index.first_duplicate() {
                return Err(ExplorerError::DuplicateIndex(dup.to_string()));
            }
        }

        let index_name = common_index_name(&tables);
        let mut union: Vec<Value> = tables
            .iter()
            .flat_map(|t| t.index.labels.iter().cloned())
            .collect();
        union.sort();
        union.dedup();

        let slots: BTreeMap<&Value, usize> =
            union.iter().enumerate().map(|(i, v)| (v, i)).collect();

        let mut columns: Vec<Column> = Vec::new();
        for table in &tables {
            let rows: Vec<usize> = table.index.labels.iter().map(|l| slots[l]).collect();
            for column in &table.columns {
                let mut values = vec![Value::Null; union.len()];
                for (value, &slot) in column.values.iter().zip(&rows) {
                    values[slot] = value.clone();
                }
                columns.push(Column::new(column.name.clone(), values));
            }
        }

        debug!(
            "Aligned {} tables on {} index labels",
            tables.len(),
            union.len()
        );

        Table::with_index_and_columns(
            Index {
                name: index_name,
                labels: union,
            },
            columns,
        )
    }
}

/// The shared index name of all tables, or `None` if they disagree.
fn common_index_name(tables: &[Table]) -> Option<String> {
    let first = tables.first()?.index.name.clone();
    tables
        .iter()
        .all(|t| t.index.name == first)
        .then_some(first)
        .flatten()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(2017, m, d).unwrap())
    }

    fn two_by_three() -> Table {
        Table::from_rows(
            vec!["heart".into(), "steps".into()],
            vec![
                vec![Value::Int(60), Value::Int(10)],
                vec![Value::Int(62), Value::Null],
                vec![Value::Null, Value::Int(30)],
            ],
        )
        .unwrap()
    }

    // ── Value ────────────────────────────────────────────────────────────────

    #[test]
    fn test_infer_numbers_and_missing() {
        assert_eq!(Value::infer("42"), Value::Int(42));
        assert_eq!(Value::infer("4.5"), Value::Float(4.5));
        assert_eq!(Value::infer(""), Value::Null);
        assert_eq!(Value::infer("NaN"), Value::Null);
        assert_eq!(Value::infer("N/A"), Value::Null);
        assert_eq!(Value::infer("True"), Value::Bool(true));
        assert_eq!(
            Value::infer("2017-04-01 00:00:00"),
            Value::Text("2017-04-01 00:00:00".into())
        );
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"a": 1, "b": 1.5, "c": "x", "d": null, "e": [1]});
        assert_eq!(Value::from(&json["a"]), Value::Int(1));
        assert_eq!(Value::from(&json["b"]), Value::Float(1.5));
        assert_eq!(Value::from(&json["c"]), Value::Text("x".into()));
        assert_eq!(Value::from(&json["d"]), Value::Null);
        assert_eq!(Value::from(&json["e"]), Value::Text("[1]".into()));
    }

    #[test]
    fn test_value_order_is_total() {
        let mut values = vec![
            Value::Text("b".into()),
            Value::Int(3),
            Value::Null,
            Value::Float(f64::NAN),
            Value::Int(1),
        ];
        values.sort();
        assert_eq!(values[0], Value::Null);
        assert_eq!(values[1], Value::Int(1));
        assert_eq!(values[2], Value::Int(3));
        assert!(matches!(values[3], Value::Float(f) if f.is_nan()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NaN");
        assert_eq!(date(4, 1).to_string(), "2017-04-01");
        let dt = NaiveDate::from_ymd_opt(2017, 4, 1)
            .unwrap()
            .and_hms_opt(23, 5, 0)
            .unwrap();
        assert_eq!(Value::DateTime(dt).to_string(), "2017-04-01 23:05:00");
    }

    // ── Construction ─────────────────────────────────────────────────────────

    #[test]
    fn test_from_rows_shape() {
        let t = two_by_three();
        assert_eq!(t.len(), 3);
        assert_eq!(t.width(), 2);
        assert_eq!(t.column_names(), vec!["heart", "steps"]);
        assert_eq!(t.index(), &Index::positional(3));
        assert_eq!(t.get(1, "heart"), Some(&Value::Int(62)));
    }

    #[test]
    fn test_from_rows_ragged_fails() {
        let err = Table::from_rows(vec!["a".into()], vec![vec![Value::Int(1), Value::Int(2)]])
            .unwrap_err();
        assert!(matches!(err, ExplorerError::ShapeMismatch(_)));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Table::from_columns(vec![
            Column::new("a", vec![Value::Int(1)]),
            Column::new("a", vec![Value::Int(2)]),
        ])
        .unwrap_err();
        assert!(matches!(err, ExplorerError::DuplicateColumn(n) if n == "a"));
    }

    // ── Column edits ─────────────────────────────────────────────────────────

    #[test]
    fn test_drop_missing_column_fails() {
        let mut t = two_by_three();
        let err = t.drop_column("Unnamed: 0").unwrap_err();
        assert!(matches!(err, ExplorerError::ColumnNotFound(_)));
        assert_eq!(t.width(), 2);
    }

    #[test]
    fn test_rename_column() {
        let mut t = two_by_three();
        t.rename_column("steps", "walk").unwrap();
        assert_eq!(t.column_names(), vec!["heart", "walk"]);
        assert!(matches!(
            t.rename_column("walk", "heart"),
            Err(ExplorerError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn test_try_map_column_stops_on_error() {
        let mut t = two_by_three();
        let err = t
            .try_map_column("heart", |v| match v {
                Value::Null => Err(ExplorerError::TimestampParse("NaN".into())),
                other => Ok(other.clone()),
            })
            .unwrap_err();
        assert!(matches!(err, ExplorerError::TimestampParse(_)));
        assert_eq!(t.get(0, "heart"), Some(&Value::Int(60)));
    }

    // ── Index edits ──────────────────────────────────────────────────────────

    #[test]
    fn test_set_index_moves_column() {
        let mut t = two_by_three();
        t.set_index("heart").unwrap();
        assert_eq!(t.column_names(), vec!["steps"]);
        assert_eq!(t.index().name.as_deref(), Some("heart"));
        assert_eq!(t.index().labels[0], Value::Int(60));
    }

    #[test]
    fn test_set_then_reset_restores_content() {
        let original = two_by_three();
        let t = original.clone().with_index("heart").unwrap().with_reset_index();
        assert_eq!(t, original);
    }

    #[test]
    fn test_reset_positional_index_leaves_no_stray_column() {
        let a = two_by_three();
        let b = two_by_three();
        let mut stacked = Table::concat_rows(vec![a, b]).unwrap();
        assert!(stacked.index().first_duplicate().is_some());

        stacked.reset_index();
        assert_eq!(stacked.index(), &Index::positional(6));
        assert_eq!(stacked.column_names(), vec!["heart", "steps"]);
    }

    // ── Reshaping ────────────────────────────────────────────────────────────

    #[test]
    fn test_head() {
        let t = two_by_three();
        assert_eq!(t.head(2).len(), 2);
        assert_eq!(t.head(10).len(), 3);
    }

    #[test]
    fn test_null_counts() {
        let counts = two_by_three().null_counts();
        assert_eq!(
            counts,
            vec![("heart".to_string(), 1), ("steps".to_string(), 1)]
        );
    }

    #[test]
    fn test_concat_rows_unions_columns() {
        let a = Table::from_columns(vec![Column::new("x", vec![Value::Int(1)])]).unwrap();
        let b = Table::from_columns(vec![
            Column::new("x", vec![Value::Int(2)]),
            Column::new("y", vec![Value::Int(3)]),
        ])
        .unwrap();

        let t = Table::concat_rows(vec![a, b]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.column_names(), vec!["x", "y"]);
        assert_eq!(t.get(0, "y"), Some(&Value::Null));
        assert_eq!(t.get(1, "y"), Some(&Value::Int(3)));
        assert_eq!(t.index().labels, vec![Value::Int(0), Value::Int(0)]);
    }

    #[test]
    fn test_concat_rows_empty_fails() {
        assert!(matches!(
            Table::concat_rows(Vec::new()),
            Err(ExplorerError::EmptyConcat)
        ));
    }

    #[test]
    fn test_concat_columns_outer_join() {
        let steps = Table::from_columns(vec![
            Column::new("dateTime", vec![date(1, 2), date(1, 1)]),
            Column::new("steps", vec![Value::Int(200), Value::Int(100)]),
        ])
        .unwrap()
        .with_index("dateTime")
        .unwrap();
        let calories = Table::from_columns(vec![
            Column::new("dateTime", vec![date(1, 1)]),
            Column::new("calories", vec![Value::Int(2000)]),
        ])
        .unwrap()
        .with_index("dateTime")
        .unwrap();

        let t = Table::concat_columns(vec![steps, calories]).unwrap();
        assert_eq!(t.index().name.as_deref(), Some("dateTime"));
        assert_eq!(t.index().labels, vec![date(1, 1), date(1, 2)]);
        assert_eq!(t.column_names(), vec!["steps", "calories"]);
        assert_eq!(t.get(0, "steps"), Some(&Value::Int(100)));
        assert_eq!(t.get(1, "steps"), Some(&Value::Int(200)));
        assert_eq!(t.get(0, "calories"), Some(&Value::Int(2000)));
        assert_eq!(t.get(1, "calories"), Some(&Value::Null));
    }

    #[test]
    fn test_concat_columns_rejects_duplicate_labels() {
        let t = Table::from_columns(vec![
            Column::new("d", vec![date(1, 1), date(1, 1)]),
            Column::new("v", vec![Value::Int(1), Value::Int(2)]),
        ])
        .unwrap()
        .with_index("d")
        .unwrap();
        let other = Table::from_columns(vec![
            Column::new("d", vec![date(1, 2)]),
            Column::new("w", vec![Value::Int(3)]),
        ])
        .unwrap()
        .with_index("d")
        .unwrap();
        let err = Table::concat_columns(vec![t, other]).unwrap_err();
        assert!(matches!(err, ExplorerError::DuplicateIndex(l) if l == "2017-01-01"));
    }

    #[test]
    fn test_concat_columns_single_table_passes_through() {
        let t = Table::from_columns(vec![
            Column::new("d", vec![date(1, 2), date(1, 1), date(1, 2)]),
            Column::new("v", vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        ])
        .unwrap()
        .with_index("d")
        .unwrap();

        let joined = Table::concat_columns(vec![t.clone()]).unwrap();
        assert_eq!(joined, t);
    }

    #[test]
    fn test_concat_columns_rejects_overlapping_names() {
        let a = Table::from_columns(vec![Column::new("v", vec![Value::Int(1)])]).unwrap();
        let b = a.clone();
        assert!(matches!(
            Table::concat_columns(vec![a, b]),
            Err(ExplorerError::DuplicateColumn(_))
        ));
    }
}
