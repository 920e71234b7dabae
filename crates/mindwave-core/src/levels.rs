//! Five-way ordinal bucketing of the 0-100 attention and meditation
//! signals.
//!
//! The mapping is kept as an ordered table rather than a conditional
//! chain so the closed upper bound of the top bucket is an explicit,
//! testable data point.

/// `(lower, upper, level)` bucket rows. Every bucket is half-open
/// `[lower, upper)` except the last, which is closed at the top so a
/// reading of exactly 100 still classifies.
const LEVEL_BUCKETS: [(i64, i64, u8); 5] = [
    (1, 20, 0),
    (20, 40, 1),
    (40, 60, 2),
    (60, 80, 3),
    (80, 100, 4),
];

/// Human-readable label per level, indexed by level value.
pub const LEVEL_LABELS: [&str; 5] = [
    "strongly lowered",
    "reduced",
    "neutral",
    "slightly elevated",
    "elevated",
];

/// Map a raw 1-100 signal value to its ordinal level.
///
/// Returns `None` for values outside 1-100 (including the 0 sentinel,
/// which the quality gate normally excludes upstream). The caller
/// decides how to report that; see the aggregator.
pub fn classify_level(value: i64) -> Option<u8> {
    let last = LEVEL_BUCKETS.len() - 1;
    LEVEL_BUCKETS
        .iter()
        .enumerate()
        .find_map(|(i, &(lower, upper, level))| {
            let inside = if i == last {
                value >= lower && value <= upper
            } else {
                value >= lower && value < upper
            };
            inside.then_some(level)
        })
}
