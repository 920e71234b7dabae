//! Predictor/response extraction from the aggregated dataset.
//!
//! The regression contract: the eight band columns and the raw
//! `attention` column must be present, numeric and non-null in every
//! row. Violations surface as [`MindwaveError::DatasetContract`].

use mindwave_core::error::{MindwaveError, Result};
use mindwave_core::models::{Record, ATTENTION, BAND_NAMES};
use mindwave_data::dataset::Dataset;
use ndarray::{Array1, Array2};
use serde_json::Value;

/// The eight predictor columns, in design-matrix column order.
pub const PREDICTORS: [&str; 8] = BAND_NAMES;

/// The response column: the raw continuous attention value, not the
/// derived `attention_level`.
pub const RESPONSE: &str = ATTENTION;

/// Build the `n × 8` predictor matrix and length-`n` response vector.
pub fn design_matrix(dataset: &Dataset) -> Result<(Array2<f64>, Array1<f64>)> {
    let n = dataset.len();
    let mut x = Array2::<f64>::zeros((n, PREDICTORS.len()));
    let mut y = Array1::<f64>::zeros(n);

    for (i, row) in dataset.rows().iter().enumerate() {
        for (j, name) in PREDICTORS.iter().enumerate() {
            x[[i, j]] = numeric_cell(row, name)?;
        }
        y[i] = numeric_cell(row, RESPONSE)?;
    }

    Ok((x, y))
}

fn numeric_cell(row: &Record, column: &str) -> Result<f64> {
    row.get(column)
        .and_then(Value::as_f64)
        .ok_or_else(|| MindwaveError::DatasetContract {
            column: column.to_string(),
            problem: "must be numeric and non-null in every row".to_string(),
        })
}
