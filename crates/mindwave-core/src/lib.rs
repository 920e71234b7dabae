//! Core domain rules for the mindwave training-data pipeline.
//!
//! Holds the record vocabulary, the signal-quality gate, the five-way
//! level classifier, the band flattener and the shared error taxonomy.
//! Everything in this crate is pure: no file or directory I/O.

pub mod error;
pub mod flatten;
pub mod gate;
pub mod levels;
pub mod models;
pub mod settings;

pub use error::{MindwaveError, Result};
