mod bootstrap;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use mindwave_core::settings::Settings;
use mindwave_data::aggregator::aggregate_logs;
use mindwave_learn::pipeline::{learn_from_csv, LearnOptions};

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("mindwave-trainer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Mode: {}, data dir: {}",
        settings.mode,
        settings.data_dir.display()
    );

    let output = settings.output_path();

    match settings.mode.as_str() {
        "collect" => run_collect(&settings, &output)?,
        "learn" => run_learn(&settings, &output)?,
        "all" => {
            run_collect(&settings, &output)?;
            run_learn(&settings, &output)?;
        }
        unknown => {
            eprintln!("Unknown mode: {}", unknown);
        }
    }

    Ok(())
}

/// Aggregate the captured logs into the combined CSV dataset.
fn run_collect(settings: &Settings, output: &Path) -> Result<()> {
    let result = aggregate_logs(&settings.data_dir, &settings.log_ext)?;
    result.dataset.write_csv(output)?;

    println!("number of samples = {}", result.summary.records_accepted);
    println!("dataset written to {}", output.display());
    Ok(())
}

/// Fit the attention model on the combined dataset and print the
/// held-out evaluation.
fn run_learn(settings: &Settings, output: &Path) -> Result<()> {
    let options = LearnOptions {
        test_fraction: settings.test_fraction,
        seed: settings.seed,
        alpha: settings.alpha,
    };
    let outcome = learn_from_csv(output, &options)?;

    println!("Coefficients: {:?}", outcome.model.coefficients.to_vec());
    println!("Intercept: {}", outcome.model.intercept);
    println!("Mean Absolute Error: {}", outcome.report.mean_absolute_error);
    println!("Mean Squared Error: {}", outcome.report.mean_squared_error);
    println!(
        "Root Mean Squared Error: {}",
        outcome.report.root_mean_squared_error
    );
    println!(
        "Explained variance score: {}",
        outcome.report.explained_variance
    );
    println!("Max error: {}", outcome.report.max_error);
    println!("r2_score: {}", outcome.report.r2);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
