//! Record vocabulary shared across the pipeline.
//!
//! A captured headset sample is one JSON object per log line. Records
//! are kept as [`serde_json::Map`] objects rather than fully typed
//! structs so that any extra fields the capture tool wrote pass
//! through to the final dataset unchanged.

use serde_json::Value;

/// One raw or enriched headset sample.
pub type Record = serde_json::Map<String, Value>;

/// The eight ASIC EEG power bands reported with every sample, in the
/// order they appear as dataset columns.
pub const BAND_NAMES: [&str; 8] = [
    "delta",
    "theta",
    "low_alpha",
    "high_alpha",
    "low_beta",
    "high_beta",
    "low_gamma",
    "mid_gamma",
];

/// Signal-quality indicator field; `0` means good sensor contact.
pub const POOR_SIGNAL: &str = "poor_signal";
/// Headset-reported attention value, 0-100 (`0` = unreliable).
pub const ATTENTION: &str = "attention";
/// Headset-reported meditation value, 0-100 (`0` = unreliable).
pub const MEDITATION: &str = "meditation";
/// Nested band-power mapping on the raw record.
pub const EEG: &str = "eeg";
/// Derived ordinal category for the attention value.
pub const ATTENTION_LEVEL: &str = "attention_level";
/// Derived ordinal category for the meditation value.
pub const MEDITATION_LEVEL: &str = "meditation_level";

/// Read an integer field from a record.
///
/// Returns `None` when the field is absent or not an integer.
pub fn int_field(record: &Record, key: &str) -> Option<i64> {
    record.get(key).and_then(Value::as_i64)
}
