use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mindwave pipeline.
#[derive(Error, Debug)]
pub enum MindwaveError {
    /// A log file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log line is not a valid JSON object. Aborts the rest of the
    /// file; line numbers are 1-based.
    #[error("Invalid record at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record has no nested `eeg` mapping at all.
    #[error("Record has no 'eeg' mapping")]
    MissingEeg,

    /// The `eeg` mapping lacks one of the eight required band keys.
    #[error("EEG mapping is missing band '{0}'")]
    MissingBand(String),

    /// A persisted dataset violates the regression input contract.
    #[error("Dataset column '{column}' {problem}")]
    DatasetContract { column: String, problem: String },

    /// The regression fit could not be completed.
    #[error("Regression fit failed: {0}")]
    Fit(String),

    /// The configured data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// Errors from the CSV layer (writing or reading the dataset).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Pass-through for JSON errors that carry no file position.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the mindwave crates.
pub type Result<T> = std::result::Result<T, MindwaveError>;
