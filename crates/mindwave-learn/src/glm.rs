//! Log-link Poisson regression.
//!
//! Equivalent model family to a Tweedie regressor with power 1 and a
//! log link: suited to a strictly-positive, right-skewed response.
//! The fit runs iteratively reweighted least squares over internally
//! standardized features with an L2 penalty on the coefficients (the
//! intercept is not penalized); coefficients are mapped back to the
//! original feature scale afterwards.

use mindwave_core::error::{MindwaveError, Result};
use ndarray::{s, Array1, Array2, Axis};
use tracing::debug;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Fit parameters.
#[derive(Debug, Clone)]
pub struct GlmConfig {
    /// L2 penalty strength on the standardized coefficients.
    pub alpha: f64,
    /// Maximum IRLS iterations.
    pub max_iter: usize,
    /// Convergence threshold on the max coefficient change.
    pub tol: f64,
}

impl Default for GlmConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            max_iter: 100,
            tol: 1e-8,
        }
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// A fitted log-link Poisson model.
#[derive(Debug, Clone)]
pub struct PoissonGlm {
    /// Per-feature coefficients on the original (unstandardized) scale.
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

impl PoissonGlm {
    /// Fit the model on an `n × p` feature matrix and length-`n`
    /// response. The response must be non-negative.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>, config: &GlmConfig) -> Result<Self> {
        let n = x.nrows();
        let p = x.ncols();
        if n == 0 {
            return Err(MindwaveError::Fit("no training rows".to_string()));
        }
        if y.len() != n {
            return Err(MindwaveError::Fit(format!(
                "feature rows ({}) and response length ({}) differ",
                n,
                y.len()
            )));
        }
        if y.iter().any(|v| *v < 0.0) {
            return Err(MindwaveError::Fit(
                "response must be non-negative for a log-link fit".to_string(),
            ));
        }

        // Standardize features so the penalty and the solver see
        // columns of comparable magnitude (band powers span orders of
        // magnitude).
        let mean = x.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(p));
        let mut std = Array1::<f64>::ones(p);
        for j in 0..p {
            let variance = x
                .column(j)
                .iter()
                .map(|v| (v - mean[j]).powi(2))
                .sum::<f64>()
                / n as f64;
            let sd = variance.sqrt();
            if sd > 1e-12 {
                std[j] = sd;
            }
        }

        let pa = p + 1; // intercept column plus features
        let mut xa = Array2::<f64>::ones((n, pa));
        for j in 0..p {
            let mut column = xa.slice_mut(s![.., j + 1]);
            column.assign(&x.column(j).mapv(|v| (v - mean[j]) / std[j]));
        }

        let mut beta = Array1::<f64>::zeros(pa);
        let mean_y = y.mean().unwrap_or(0.0);
        beta[0] = mean_y.max(1e-10).ln();
        let lambda = config.alpha * n as f64;

        let mut iterations = 0usize;
        for iteration in 0..config.max_iter {
            iterations = iteration + 1;

            let eta = xa.dot(&beta).mapv(|v| v.clamp(-30.0, 30.0));
            let mu = eta.mapv(f64::exp);

            // Working response and weights for the log link; the
            // Poisson variance function makes the weight equal to mu.
            let z = &eta + &((y - &mu) / &mu);
            let weighted = &xa * &mu.view().insert_axis(Axis(1));

            let mut normal = xa.t().dot(&weighted);
            for j in 1..pa {
                normal[[j, j]] += lambda;
            }
            let rhs = weighted.t().dot(&z);

            let next = solve_linear(normal, rhs)?;
            let delta = next
                .iter()
                .zip(beta.iter())
                .fold(0.0f64, |acc, (a, b)| acc.max((a - b).abs()));
            beta = next;
            if delta < config.tol {
                break;
            }
        }
        debug!("IRLS finished after {} iterations", iterations);

        // Map standardized coefficients back to the original scale.
        let mut coefficients = Array1::<f64>::zeros(p);
        let mut intercept = beta[0];
        for j in 0..p {
            coefficients[j] = beta[j + 1] / std[j];
            intercept -= coefficients[j] * mean[j];
        }

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    /// Predict the response for each row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        (x.dot(&self.coefficients) + self.intercept).mapv(|v| v.clamp(-30.0, 30.0).exp())
    }
}

// ── Linear solver ─────────────────────────────────────────────────────────────

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
/// The system here is the (p+1)×(p+1) penalized normal equations.
fn solve_linear(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();

    for col in 0..n {
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        if a[[pivot, col]].abs() < 1e-12 {
            return Err(MindwaveError::Fit(
                "singular normal-equation system".to_string(),
            ));
        }
        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in (row + 1)..n {
            acc -= a[[row, k]] * x[k];
        }
        x[row] = acc / a[[row, row]];
    }
    Ok(x)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
