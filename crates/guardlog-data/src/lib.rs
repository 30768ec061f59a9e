//! Data layer for the guard log analyser.
//!
//! Responsible for loading raw log lines, sequencing them chronologically,
//! rebuilding guard shifts, aggregating per-guard statistics and running the
//! top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod analyzer;
pub mod queries;
pub mod reader;

pub use guardlog_core as core;
