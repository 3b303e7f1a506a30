//! Generic tables inferred from JSON

use super::{ShapeError, json_kind, value_text};
use serde_json::Value;

/// Column used for list items that are not objects.
pub const VALUE_COLUMN: &str = "value";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display width of each column, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Builds a table from an opaque JSON payload.
///
/// A list of objects gives one row per object with the union of their keys as
/// columns, in first-seen order. List items that are not objects go into a
/// trailing `value` column. A single object is one row.
pub fn infer_table(payload: &Value) -> Result<Table, ShapeError> {
    match payload {
        Value::Array(items) => Ok(table_from_items(items)),
        Value::Object(_) => Ok(table_from_items(std::slice::from_ref(payload))),
        other => Err(ShapeError::Audit(json_kind(other))),
    }
}

fn table_from_items(items: &[Value]) -> Table {
    let mut headers: Vec<String> = Vec::new();
    let mut has_scalars = false;
    for item in items {
        match item {
            Value::Object(record) => {
                for key in record.keys() {
                    if !headers.iter().any(|h| h == key) {
                        headers.push(key.clone());
                    }
                }
            }
            _ => has_scalars = true,
        }
    }
    if has_scalars {
        headers.push(VALUE_COLUMN.to_string());
    }

    let rows = items
        .iter()
        .map(|item| match item {
            Value::Object(record) => headers
                .iter()
                .map(|header| value_text(record.get(header)))
                .collect(),
            scalar => headers
                .iter()
                .map(|header| {
                    if header == VALUE_COLUMN {
                        value_text(Some(scalar))
                    } else {
                        String::new()
                    }
                })
                .collect(),
        })
        .collect();

    Table::new(headers, rows)
}
