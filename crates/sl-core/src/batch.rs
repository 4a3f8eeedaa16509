//! In-memory tabular batches
//!
//! A [`Batch`] is a finite, ordered collection of uniformly-shaped rows,
//! the unit of work for one pipeline run. Rows are dynamic maps so that
//! columns the pipeline does not know about pass through cleaning
//! untouched. Cleaners never mutate their input batch; they build a new
//! one (copy-on-write semantics).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreResult;

/// A single record: column name to cell value
pub type Row = serde_json::Map<String, Value>;

/// An ordered batch of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    rows: Vec<Row>,
}

impl Batch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a batch from pre-built rows, preserving their order
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a batch from a JSON array of objects
    ///
    /// Intended for tests and fixtures. Fails if the value is not an
    /// array or any element is not an object.
    pub fn from_json(value: Value) -> CoreResult<Self> {
        let rows: Vec<Row> = serde_json::from_value(value)?;
        Ok(Self { rows })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows in input order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the batch, yielding its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Append a row
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Whether every row carries the named column (null counts as present)
    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().all(|row| row.contains_key(name))
    }

    /// The values of one column, in row order (missing cells become null)
    pub fn column(&self, name: &str) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| row.get(name).cloned().unwrap_or(Value::Null))
            .collect()
    }
}

impl FromIterator<Row> for Batch {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Whether a cell is null (either JSON null or an absent column)
pub fn is_null(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Read a cell as a string slice, treating null/absent/non-string as None
pub fn str_cell<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.get(column).and_then(Value::as_str)
}

/// Read a cell as an integer, accepting whole-valued floats
///
/// Extractors for document stores frequently deliver integer columns as
/// floats; a whole-valued float is accepted here so that cleaning does not
/// misread them as null.
pub fn int_cell(row: &Row, column: &str) -> Option<i64> {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Read a cell as a float
pub fn float_cell(row: &Row, column: &str) -> Option<f64> {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
