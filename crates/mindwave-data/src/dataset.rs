//! The aggregated tabular dataset and its CSV persistence.
//!
//! A [`Dataset`] is an append-only ordered sequence of enriched
//! records. Because individual records may carry different passthrough
//! fields, the column set is the union of all row keys; cells for
//! columns a row lacks are written empty and read back as null.

use std::path::Path;

use mindwave_core::error::Result;
use mindwave_core::models::Record;
use serde_json::Value;

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Ordered collection of enriched records with a stable column set.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one enriched record.
    pub fn push(&mut self, row: Record) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// The column set: union of all row keys in first-appearance
    /// order over a single row scan. Within a row, `serde_json` keeps
    /// keys sorted, so the result is deterministic across runs.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }

    /// Look up a cell, treating an absent key as null.
    pub fn cell<'a>(&'a self, row: usize, column: &str) -> &'a Value {
        self.rows[row].get(column).unwrap_or(&Value::Null)
    }

    // ── CSV persistence ───────────────────────────────────────────────────────

    /// Serialize the dataset to `path`: one header row, one row per
    /// record, comma-delimited, quoting handled by the CSV layer.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let columns = self.columns();
        if columns.is_empty() {
            // No rows and no columns: leave an empty file.
            std::fs::File::create(path)?;
            return Ok(());
        }
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(&columns)?;
        for row in &self.rows {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| cell_to_string(row.get(column).unwrap_or(&Value::Null)))
                .collect();
            writer.write_record(&cells)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reload a dataset written by [`Dataset::write_csv`].
    ///
    /// Cells are parsed back as integer, then float, then JSON
    /// (objects, arrays, booleans), else kept as strings; empty cells
    /// become null. Numeric types may widen relative to the original
    /// rows, which is the documented round-trip tolerance.
    pub fn read_csv(path: &Path) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let headers = reader.headers()?.clone();

        let mut dataset = Dataset::new();
        for result in reader.records() {
            let csv_row = result?;
            let mut row = Record::new();
            for (header, cell) in headers.iter().zip(csv_row.iter()) {
                row.insert(header.to_string(), parse_cell(cell));
            }
            dataset.push(row);
        }
        Ok(dataset)
    }
}

// ── Cell conversion ───────────────────────────────────────────────────────────

/// Render one JSON value as a CSV cell. Non-scalar values (e.g. the
/// passthrough `eeg` object) serialize as their compact JSON text.
fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse one CSV cell back into a JSON value.
fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = cell.parse::<i64>() {
        return Value::from(integer);
    }
    if let Ok(float) = cell.parse::<f64>() {
        return Value::from(float);
    }
    if let Ok(value) = serde_json::from_str::<Value>(cell) {
        if value.is_object() || value.is_array() || value.is_boolean() {
            return value;
        }
    }
    Value::String(cell.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
