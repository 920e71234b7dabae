//! Regression layer for the mindwave trainer.
//!
//! Consumes the combined dataset produced by `mindwave-data` and fits
//! a log-link Poisson regression predicting the raw attention value
//! from the eight EEG band powers, reporting standard quality metrics
//! on a seeded held-out split.

pub mod design;
pub mod glm;
pub mod metrics;
pub mod pipeline;
pub mod split;

pub use mindwave_core as core;
