//! Data ingestion layer for the mindwave trainer.
//!
//! Responsible for discovering captured log files, parsing their
//! line-delimited JSON records, running each record through the
//! quality gate / classifier / flattener, and persisting the combined
//! dataset as CSV.

pub mod aggregator;
pub mod dataset;
pub mod reader;

pub use mindwave_core as core;
