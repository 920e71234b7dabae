//! Fit-and-evaluate pipeline over a persisted dataset.
//!
//! 1. Load the combined CSV dataset.
//! 2. Extract the band predictors and the raw attention response.
//! 3. Hold out a seeded split for evaluation.
//! 4. Fit the log-link model on the training rows.
//! 5. Report quality metrics on the held-out rows.

use std::path::Path;

use mindwave_core::error::{MindwaveError, Result};
use mindwave_data::dataset::Dataset;
use ndarray::Axis;
use tracing::info;

use crate::design::design_matrix;
use crate::glm::{GlmConfig, PoissonGlm};
use crate::metrics::{evaluate, RegressionReport};
use crate::split::holdout_split;

// ── Options and outcome ───────────────────────────────────────────────────────

/// Knobs for one learning run.
#[derive(Debug, Clone)]
pub struct LearnOptions {
    /// Fraction of rows held out for evaluation.
    pub test_fraction: f64,
    /// Seed for the split shuffle.
    pub seed: u64,
    /// L2 penalty strength.
    pub alpha: f64,
}

impl Default for LearnOptions {
    fn default() -> Self {
        Self {
            test_fraction: 0.3,
            seed: 1,
            alpha: 0.5,
        }
    }
}

/// The fitted model plus its held-out evaluation.
#[derive(Debug, Clone)]
pub struct LearnOutcome {
    pub model: PoissonGlm,
    pub report: RegressionReport,
    pub train_rows: usize,
    pub test_rows: usize,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Load `path` and run the learning pipeline on it.
pub fn learn_from_csv(path: &Path, options: &LearnOptions) -> Result<LearnOutcome> {
    let dataset = Dataset::read_csv(path)?;
    info!("Loaded {} rows from {}", dataset.len(), path.display());
    learn_from_dataset(&dataset, options)
}

/// Run the learning pipeline on an in-memory dataset.
pub fn learn_from_dataset(dataset: &Dataset, options: &LearnOptions) -> Result<LearnOutcome> {
    let (x, y) = design_matrix(dataset)?;

    let split = holdout_split(dataset.len(), options.test_fraction, options.seed);
    if split.train.is_empty() || split.test.is_empty() {
        return Err(MindwaveError::Fit(format!(
            "dataset with {} rows is too small for a {:.0}% held-out split",
            dataset.len(),
            options.test_fraction * 100.0
        )));
    }

    let x_train = x.select(Axis(0), &split.train);
    let y_train = y.select(Axis(0), &split.train);
    let x_test = x.select(Axis(0), &split.test);
    let y_test = y.select(Axis(0), &split.test);

    let config = GlmConfig {
        alpha: options.alpha,
        ..GlmConfig::default()
    };
    let model = PoissonGlm::fit(&x_train, &y_train, &config)?;

    let predicted = model.predict(&x_test);
    let report = evaluate(&y_test, &predicted);

    info!(
        "Fitted on {} rows, evaluated on {}: rmse={:.4}, r2={:.4}",
        split.train.len(),
        split.test.len(),
        report.root_mean_squared_error,
        report.r2
    );

    Ok(LearnOutcome {
        model,
        report,
        train_rows: split.train.len(),
        test_rows: split.test.len(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
