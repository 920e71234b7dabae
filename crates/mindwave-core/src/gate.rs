//! Signal-quality gate.
//!
//! The headset reports `poor_signal != 0` when sensor-skin contact is
//! unreliable, and reports an attention or meditation value of 0 as a
//! sentinel for "no confident value" rather than a true low reading.
//! Both cases must be dropped so downstream statistics are not biased
//! toward spurious zeros.

use crate::models::{int_field, Record, ATTENTION, MEDITATION, POOR_SIGNAL};

/// Returns `true` when a record is reliable enough to use.
///
/// Accepts iff `poor_signal == 0`, `attention != 0` and
/// `meditation != 0`. A record missing any of the three fields (or
/// carrying a non-integer value) is rejected: its quality cannot be
/// established.
pub fn is_reliable(record: &Record) -> bool {
    matches!(int_field(record, POOR_SIGNAL), Some(0))
        && matches!(int_field(record, ATTENTION), Some(v) if v != 0)
        && matches!(int_field(record, MEDITATION), Some(v) if v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(poor_signal: i64, attention: i64, meditation: i64) -> Record {
        serde_json::from_value(serde_json::json!({
            "poor_signal": poor_signal,
            "attention": attention,
            "meditation": meditation,
        }))
        .unwrap()
    }

    #[test]
    fn test_accepts_clean_record() {
        assert!(is_reliable(&record(0, 45, 10)));
    }

    #[test]
    fn test_rejects_poor_signal() {
        assert!(!is_reliable(&record(1, 50, 50)));
        assert!(!is_reliable(&record(200, 50, 50)));
    }

    #[test]
    fn test_rejects_zero_attention() {
        // attention == 0 excludes the record regardless of other fields.
        assert!(!is_reliable(&record(0, 0, 50)));
    }

    #[test]
    fn test_rejects_zero_meditation() {
        assert!(!is_reliable(&record(0, 50, 0)));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let empty = Record::new();
        assert!(!is_reliable(&empty));

        let partial: Record =
            serde_json::from_str(r#"{"poor_signal": 0, "attention": 45}"#).unwrap();
        assert!(!is_reliable(&partial));
    }

    #[test]
    fn test_rejects_non_integer_quality() {
        let bad: Record = serde_json::from_str(
            r#"{"poor_signal": "ok", "attention": 45, "meditation": 45}"#,
        )
        .unwrap();
        assert!(!is_reliable(&bad));
    }
}
