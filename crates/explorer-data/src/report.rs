//! Console summaries of a loaded table: its column listing and a
//! missing-value report.

use std::cmp::Reverse;
use std::fmt;
use std::io::{self, Write};

use explorer_core::error::Result;
use explorer_core::formatting::{format_decimal, render_grid};
use explorer_core::table::{Column, Index, Table, Value};

// ── Column listing ────────────────────────────────────────────────────────────

/// Write the row count and column names of `table`, labelled `name`.
pub fn write_columns<W: Write>(out: &mut W, table: &Table, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "For the data \"{}\", we have {} datapoints and the following features:",
        name,
        table.len()
    )?;
    for column in table.column_names() {
        writeln!(out, "- {}", column)?;
    }
    writeln!(out)
}

/// [`write_columns`] to stdout.
pub fn print_columns(table: &Table, name: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_columns(&mut lock, table, name)
}

// ── Missing-data report ───────────────────────────────────────────────────────

/// Missing-value statistics of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingEntry {
    pub column: String,
    /// Number of missing cells.
    pub total: usize,
    /// `total` divided by the table's row count.
    pub percent: f64,
}

/// Columns with at least one missing value, most-missing first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingReport {
    entries: Vec<MissingEntry>,
}

impl MissingReport {
    pub fn entries(&self) -> &[MissingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, column: &str) -> Option<&MissingEntry> {
        self.entries.iter().find(|e| e.column == column)
    }

    /// The report as a table indexed by column name with `Total` and
    /// `Percent` columns.
    pub fn into_table(self) -> Result<Table> {
        let mut labels = Vec::with_capacity(self.entries.len());
        let mut totals = Vec::with_capacity(self.entries.len());
        let mut percents = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            labels.push(Value::Text(entry.column));
            totals.push(Value::Int(entry.total as i64));
            percents.push(Value::Float(entry.percent));
        }

        Table::with_index_and_columns(
            Index { name: None, labels },
            vec![Column::new("Total", totals), Column::new("Percent", percents)],
        )
    }
}

impl fmt::Display for MissingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = vec![String::new(), "Total".to_string(), "Percent".to_string()];
        let rows: Vec<Vec<String>> = self
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.column.clone(),
                    e.total.to_string(),
                    format_decimal(e.percent, 6),
                ]
            })
            .collect();
        write!(f, "{}", render_grid(&header, &rows))
    }
}

/// Count missing values per column of `table`.
///
/// Columns without missing values are left out. An empty table has no
/// missing fraction, so its report is empty.
pub fn count_missing_data(table: &Table) -> MissingReport {
    let rows = table.len();
    if rows == 0 {
        return MissingReport::default();
    }

    let mut entries: Vec<MissingEntry> = table
        .null_counts()
        .into_iter()
        .map(|(column, total)| MissingEntry {
            column,
            total,
            percent: total as f64 / rows as f64,
        })
        .collect();

    entries.sort_by_key(|e| Reverse(e.total));
    entries.retain(|e| e.percent > 0.0);

    MissingReport { entries }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn column_with_gaps(name: &str, rows: usize, missing: usize) -> Column {
        let values = (0..rows)
            .map(|i| {
                if i < missing {
                    Value::Null
                } else {
                    Value::Int(i as i64)
                }
            })
            .collect();
        Column::new(name, values)
    }

    // ── write_columns ────────────────────────────────────────────────────────

    #[test]
    fn test_write_columns_format() {
        let table = Table::from_columns(vec![
            column_with_gaps("heart", 5, 0),
            column_with_gaps("steps", 5, 0),
        ])
        .unwrap();

        let mut out = Vec::new();
        write_columns(&mut out, &table, "test").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(
            lines[0],
            "For the data \"test\", we have 5 datapoints and the following features:"
        );
        assert_eq!(lines[1], "- heart");
        assert_eq!(lines[2], "- steps");
        assert_eq!(lines[3], "");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines.iter().filter(|l| l.starts_with("- ")).count(), 2);
    }

    #[test]
    fn test_write_columns_empty_table() {
        let mut out = Vec::new();
        write_columns(&mut out, &Table::new(), "nothing").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "For the data \"nothing\", we have 0 datapoints and the following features:\n\n"
        );
    }

    // ── count_missing_data ───────────────────────────────────────────────────

    #[test]
    fn test_missing_report_keeps_only_gappy_columns() {
        let table = Table::from_columns(vec![
            column_with_gaps("A", 10, 0),
            column_with_gaps("B", 10, 3),
        ])
        .unwrap();

        let report = count_missing_data(&table);
        assert_eq!(report.len(), 1);
        let b = report.get("B").unwrap();
        assert_eq!(b.total, 3);
        assert!((b.percent - 0.3).abs() < 1e-12);
        assert!(report.get("A").is_none());
    }

    #[test]
    fn test_missing_report_sorted_descending() {
        let table = Table::from_columns(vec![
            column_with_gaps("few", 4, 1),
            column_with_gaps("none", 4, 0),
            column_with_gaps("many", 4, 3),
            column_with_gaps("some", 4, 1),
        ])
        .unwrap();

        let report = count_missing_data(&table);
        let names: Vec<&str> = report
            .entries()
            .iter()
            .map(|e| e.column.as_str())
            .collect();
        assert_eq!(names, vec!["many", "few", "some"]);
    }

    #[test]
    fn test_missing_report_empty_table() {
        let table = Table::from_columns(vec![Column::new("x", Vec::new())]).unwrap();
        assert!(count_missing_data(&table).is_empty());
    }

    #[test]
    fn test_missing_report_into_table() {
        let table = Table::from_columns(vec![column_with_gaps("B", 10, 3)]).unwrap();
        let t = count_missing_data(&table).into_table().unwrap();

        assert_eq!(t.column_names(), vec!["Total", "Percent"]);
        assert_eq!(t.index().labels, vec![Value::Text("B".into())]);
        assert_eq!(t.get(0, "Total"), Some(&Value::Int(3)));
        assert_eq!(t.get(0, "Percent"), Some(&Value::Float(0.3)));
    }

    #[test]
    fn test_missing_report_display() {
        let table = Table::from_columns(vec![column_with_gaps("steps", 4, 1)]).unwrap();
        let text = count_missing_data(&table).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["       Total   Percent", "steps      1  0.250000"]);
    }
}
