//! Regression-quality metrics over a held-out split.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// The standard quality metrics reported after a fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionReport {
    pub mean_absolute_error: f64,
    pub mean_squared_error: f64,
    pub root_mean_squared_error: f64,
    pub explained_variance: f64,
    pub max_error: f64,
    pub r2: f64,
}

/// Compute all metrics for `predicted` against `actual`.
///
/// Both vectors must have the same non-zero length; an empty input
/// yields an all-zero report.
pub fn evaluate(actual: &Array1<f64>, predicted: &Array1<f64>) -> RegressionReport {
    let n = actual.len();
    if n == 0 || predicted.len() != n {
        return RegressionReport {
            mean_absolute_error: 0.0,
            mean_squared_error: 0.0,
            root_mean_squared_error: 0.0,
            explained_variance: 0.0,
            max_error: 0.0,
            r2: 0.0,
        };
    }

    let residuals: Array1<f64> = actual - predicted;
    let mean_absolute_error = residuals.iter().map(|e| e.abs()).sum::<f64>() / n as f64;
    let mean_squared_error = residuals.iter().map(|e| e * e).sum::<f64>() / n as f64;
    let max_error = residuals.iter().fold(0.0f64, |acc, e| acc.max(e.abs()));

    let actual_mean = actual.sum() / n as f64;
    let total_variance = actual
        .iter()
        .map(|a| (a - actual_mean).powi(2))
        .sum::<f64>()
        / n as f64;
    let residual_mean = residuals.sum() / n as f64;
    let residual_variance = residuals
        .iter()
        .map(|e| (e - residual_mean).powi(2))
        .sum::<f64>()
        / n as f64;

    RegressionReport {
        mean_absolute_error,
        mean_squared_error,
        root_mean_squared_error: mean_squared_error.sqrt(),
        explained_variance: ratio_score(residual_variance, total_variance),
        max_error,
        r2: ratio_score(mean_squared_error, total_variance),
    }
}

/// `1 - numerator/denominator`, defined as 1 when both are zero
/// (perfect fit of a constant response) and 0 when only the
/// denominator is.
fn ratio_score(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        if numerator == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - numerator / denominator
    }
}
