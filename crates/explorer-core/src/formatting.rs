use crate::table::Table;

/// Format a floating-point number with a fixed number of decimal places.
///
/// # Examples
///
/// ```
/// use explorer_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(0.3, 4), "0.3000");
/// assert_eq!(format_decimal(12.0, 0), "12");
/// assert_eq!(format_decimal(-1.26, 1), "-1.3");
/// ```
pub fn format_decimal(value: f64, decimals: u32) -> String {
    format!("{:.prec$}", value, prec = decimals as usize)
}

/// Render a text grid with right-aligned cells and a header row.
///
/// `rows` must all have the same length as `header`; extra cells are ignored
/// and missing ones render blank.
pub fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut out = String::new();
    push_line(&mut out, header, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

/// Render up to `max_rows` rows of a table, index first.
///
/// A trailing `[N rows x M columns]` footer is added when rows were cut.
pub fn render_table(table: &Table, max_rows: usize) -> String {
    let shown = table.head(max_rows);

    let mut header = vec![shown.index().name.clone().unwrap_or_default()];
    header.extend(shown.column_names().into_iter().map(String::from));

    let rows: Vec<Vec<String>> = (0..shown.len())
        .map(|i| {
            let mut row = vec![shown.index().labels[i].to_string()];
            row.extend(shown.columns().iter().map(|c| c.values[i].to_string()));
            row
        })
        .collect();

    let mut out = render_grid(&header, &rows);
    if table.len() > shown.len() {
        out.push_str(&format!(
            "...\n[{} rows x {} columns]\n",
            table.len(),
            table.width()
        ));
    }
    out
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{:>w$}", cell, w = w)
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

// ── Tests ──────────────────────────────────────────────────────────────────────
