//! Core types for the guard log analyser.
//!
//! Holds the log-entry and shift models, the error taxonomy, line parsing,
//! minute-of-hour helpers, report formatting and CLI settings. Nothing in
//! here performs I/O.

pub mod error;
pub mod formatting;
pub mod models;
pub mod parser;
pub mod settings;
pub mod time_utils;

pub use error::{GuardLogError, Result};
