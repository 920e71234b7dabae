//! Deterministic held-out split.
//!
//! Row indices are shuffled under a fixed seed so repeated runs
//! evaluate on the same held-out rows.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Row indices for the training and evaluation partitions.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n_rows` with a seeded RNG and hold out the trailing
/// `test_fraction` of indices (rounded, clamped to `[0, 1]`).
pub fn holdout_split(n_rows: usize, test_fraction: f64, seed: u64) -> Split {
    let mut indices: Vec<usize> = (0..n_rows).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    let fraction = test_fraction.clamp(0.0, 1.0);
    let test_len = ((n_rows as f64) * fraction).round() as usize;
    let test = indices.split_off(n_rows - test_len);

    Split {
        train: indices,
        test,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_sizes() {
        let split = holdout_split(10, 0.3, 1);
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 7);
    }

    #[test]
    fn test_split_is_deterministic_for_a_seed() {
        let a = holdout_split(50, 0.3, 1);
        let b = holdout_split(50, 0.3, 1);
        assert_eq!(a.train, b.train);
        assert_eq!(a.test, b.test);
    }

    #[test]
    fn test_split_differs_across_seeds() {
        let a = holdout_split(50, 0.3, 1);
        let b = holdout_split(50, 0.3, 2);
        assert_ne!(a.test, b.test);
    }

    #[test]
    fn test_split_partitions_all_rows() {
        let split = holdout_split(25, 0.3, 7);
        let mut seen: HashSet<usize> = split.train.iter().copied().collect();
        for idx in &split.test {
            assert!(seen.insert(*idx), "index {} appears twice", idx);
        }
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn test_fraction_is_clamped() {
        let split = holdout_split(10, 1.7, 1);
        assert_eq!(split.test.len(), 10);
        assert!(split.train.is_empty());

        let split = holdout_split(10, -0.5, 1);
        assert!(split.test.is_empty());
        assert_eq!(split.train.len(), 10);
    }

    #[test]
    fn test_zero_rows() {
        let split = holdout_split(0, 0.3, 1);
        assert!(split.train.is_empty());
        assert!(split.test.is_empty());
    }
}
