use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::error::{AppError, ConfigError};
use crate::utils::text::{display_width, pad_to_width, truncate_to_width};

/// Stable identifier of a record: its position in the source array.
pub type RowId = usize;

/// Cells wider than this are truncated when the row is rendered.
const MAX_CELL_WIDTH: usize = 48;

/// Columns reserve room for the sort arrow and tiebreak marker up front so
/// data lines never shift when the header is rebuilt.
const MARKER_ALLOWANCE: usize = 4;

/// Precomputed comparison value for one cell. Comparisons elsewhere operate
/// only on this normal form, never on the original JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Total order over sort keys. JSON cannot encode NaN, so `total_cmp`
    /// agrees with plain magnitude comparison for every number we see.
    /// Numbers sort before text so a mixed column still orders
    /// deterministically.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Immutable rendered rows plus per-column sort indexes, built once from a
/// raw JSON array. Repeated sorts never touch the raw records (which are
/// consumed here) or the rendered lines.
#[derive(Debug)]
pub struct TableDataset {
    columns: Vec<String>,
    widths: Vec<usize>,
    lines: Vec<String>,
    // Outer: column position. Inner: indexed by RowId.
    indexes: Vec<Vec<SortKey>>,
}

impl TableDataset {
    /// Build the dataset: render every record into a display line, in input
    /// order, and derive one sort key per declared column.
    ///
    /// A declared column absent from a record is a configuration error; cells
    /// are never silently blanked.
    pub fn build(
        columns: &[String],
        records: Vec<Map<String, Value>>,
    ) -> Result<TableDataset, AppError> {
        let mut cell_rows: Vec<Vec<String>> = Vec::with_capacity(records.len());
        let mut indexes: Vec<Vec<SortKey>> = vec![Vec::with_capacity(records.len()); columns.len()];

        for (row, record) in records.iter().enumerate() {
            let mut cells = Vec::with_capacity(columns.len());
            for (pos, column) in columns.iter().enumerate() {
                let value = record.get(column).ok_or_else(|| ConfigError::MissingColumn {
                    column: column.clone(),
                    row,
                })?;
                let cell = format_cell_value(value);
                indexes[pos].push(sort_key(value, &cell, column, row)?);
                cells.push(cell);
            }
            cell_rows.push(cells);
        }

        let widths = column_widths(columns, &cell_rows);
        let lines = cell_rows
            .into_iter()
            .map(|cells| render_line(&cells, &widths))
            .collect();

        Ok(TableDataset {
            columns: columns.to_vec(),
            widths,
            lines,
            indexes,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Final display width of each column, marker allowance included.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// The row's rendered line, created once at build time.
    pub fn line(&self, id: RowId) -> &str {
        &self.lines[id]
    }

    /// Precomputed sort key for a cell, by column position and row id.
    pub fn sort_key(&self, column_pos: usize, id: RowId) -> &SortKey {
        &self.indexes[column_pos][id]
    }
}

/// Render one JSON value as cell text. Composite values get a compact
/// rendering that also serves as their comparison fallback.
fn format_cell_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => truncate_to_width(s, MAX_CELL_WIDTH),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            if arr.is_empty() {
                "[]".to_string()
            } else {
                format!("[{} items]", arr.len())
            }
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                "{}".to_string()
            } else {
                format!("{{{} items}}", obj.len())
            }
        }
    }
}

/// Derive the comparison normal form for one cell. Numbers compare as
/// numbers, strings case-insensitively, and composite values (arrays,
/// objects, null) by their rendered text, case-insensitively. Anything else
/// is a programmer error.
fn sort_key(value: &Value, rendered: &str, column: &str, row: usize) -> Result<SortKey, AppError> {
    match value {
        Value::Number(n) => Ok(SortKey::Number(n.as_f64().unwrap_or_default())),
        Value::String(s) => Ok(SortKey::Text(s.to_lowercase())),
        Value::Array(_) | Value::Object(_) | Value::Null => {
            Ok(SortKey::Text(rendered.to_lowercase()))
        }
        Value::Bool(_) => Err(ConfigError::UnsortableValue {
            column: column.to_string(),
            row,
            value_type: "boolean",
        }
        .into()),
    }
}

fn column_widths(columns: &[String], cell_rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(pos, column)| {
            let widest_cell = cell_rows
                .iter()
                .map(|cells| display_width(&cells[pos]))
                .max()
                .unwrap_or(0);
            widest_cell
                .min(MAX_CELL_WIDTH)
                .max(display_width(column) + MARKER_ALLOWANCE)
        })
        .collect()
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_to_width(&truncate_to_width(cell, width), width))
        .collect();
    rendered.join("  ").trim_end().to_string()
}
