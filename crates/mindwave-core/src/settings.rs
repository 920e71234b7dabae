use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Build EEG training datasets from captured headset logs and fit an
/// attention-regression model on the result.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mindwave-trainer",
    about = "Aggregate captured EEG headset logs into a training dataset",
    version
)]
pub struct Settings {
    /// Pipeline stage to run
    #[arg(long, default_value = "collect", value_parser = ["collect", "learn", "all"])]
    pub mode: String,

    /// Root directory scanned recursively for captured log files
    #[arg(long, default_value = "./train_data")]
    pub data_dir: PathBuf,

    /// Extension of the log files to ingest
    #[arg(long, default_value = "txt")]
    pub log_ext: String,

    /// Path of the combined CSV dataset (defaults to
    /// <data-dir>/train_data_combined.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Fraction of rows held out for evaluation
    #[arg(long, default_value = "0.3")]
    pub test_fraction: f64,

    /// Seed for the held-out split shuffle
    #[arg(long, default_value = "1")]
    pub seed: u64,

    /// L2 penalty strength for the regression fit
    #[arg(long, default_value = "0.5")]
    pub alpha: f64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

impl Settings {
    /// Resolve the dataset path: explicit `--output` when given,
    /// otherwise `<data-dir>/train_data_combined.csv`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.data_dir.join("train_data_combined.csv"))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
