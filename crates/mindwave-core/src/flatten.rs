//! Band flattening.
//!
//! Copies the eight nested `eeg` power values onto the top level of a
//! record so the dataset carries one scalar column per band. The
//! nested `eeg` mapping itself is left in place like any other
//! passthrough field.

use serde_json::Value;

use crate::error::{MindwaveError, Result};
use crate::models::{Record, BAND_NAMES, EEG};

/// Copy each of the eight band values from `eeg` into a top-level
/// field of the same name.
///
/// Fails with [`MindwaveError::MissingEeg`] when the record has no
/// `eeg` object, and [`MindwaveError::MissingBand`] when any of the
/// eight required band keys is absent. There is no default
/// substitution. Extra band keys are ignored.
pub fn flatten_bands(record: &mut Record) -> Result<()> {
    let mut bands = Vec::with_capacity(BAND_NAMES.len());
    {
        let eeg = record
            .get(EEG)
            .and_then(Value::as_object)
            .ok_or(MindwaveError::MissingEeg)?;
        for name in BAND_NAMES {
            let value = eeg
                .get(name)
                .cloned()
                .ok_or_else(|| MindwaveError::MissingBand(name.to_string()))?;
            bands.push((name, value));
        }
    }
    for (name, value) in bands {
        record.insert(name.to_string(), value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_bands() -> Record {
        serde_json::from_value(serde_json::json!({
            "poor_signal": 0,
            "attention": 45,
            "meditation": 62,
            "eeg": {
                "delta": 100, "theta": 200, "low_alpha": 300, "high_alpha": 400,
                "low_beta": 500, "high_beta": 600, "low_gamma": 700, "mid_gamma": 800,
            },
        }))
        .unwrap()
    }

    #[test]
    fn test_flatten_copies_all_bands() {
        let mut record = record_with_bands();
        flatten_bands(&mut record).unwrap();

        assert_eq!(record.get("delta").and_then(Value::as_i64), Some(100));
        assert_eq!(record.get("mid_gamma").and_then(Value::as_i64), Some(800));
        for name in BAND_NAMES {
            assert!(record.contains_key(name), "band {} must be flattened", name);
        }
    }

    #[test]
    fn test_flatten_keeps_nested_eeg() {
        let mut record = record_with_bands();
        flatten_bands(&mut record).unwrap();
        // The nested mapping stays as a passthrough field.
        assert!(record.get(EEG).map(|v| v.is_object()).unwrap_or(false));
    }

    #[test]
    fn test_missing_band_is_an_error() {
        let mut record = record_with_bands();
        record
            .get_mut(EEG)
            .and_then(Value::as_object_mut)
            .unwrap()
            .remove("mid_gamma");

        let err = flatten_bands(&mut record).unwrap_err();
        match err {
            MindwaveError::MissingBand(band) => assert_eq!(band, "mid_gamma"),
            other => panic!("expected MissingBand, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_eeg_is_an_error() {
        let mut record = record_with_bands();
        record.remove(EEG);
        assert!(matches!(
            flatten_bands(&mut record),
            Err(MindwaveError::MissingEeg)
        ));
    }

    #[test]
    fn test_extra_band_keys_are_ignored() {
        let mut record = record_with_bands();
        record
            .get_mut(EEG)
            .and_then(Value::as_object_mut)
            .unwrap()
            .insert("ultra_gamma".to_string(), serde_json::json!(999));

        flatten_bands(&mut record).unwrap();
        assert!(!record.contains_key("ultra_gamma"));
    }
}
