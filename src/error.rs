//! Custom error types for beerus
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for beerus operations
#[derive(Error, Debug)]
pub enum BeerusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A store already exists where `init` wants to create one
    #[error("A bill store already exists at {}", .0.display())]
    StoreAlreadyExists(PathBuf),

    /// The action needs a store but none has been initialized
    #[error("No bill store found at {} (run 'beerus init' first)", .0.display())]
    StoreMissing(PathBuf),

    /// Amount input that is not an exact decimal literal
    #[error("Invalid amount: '{0}'. Use a decimal number like '12.50'")]
    InvalidAmount(String),

    /// Date input that is not an ISO 8601 calendar day
    #[error("Invalid date: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// A sum or difference of amounts left the representable decimal range
    #[error("Amount out of range: {0}")]
    AmountOverflow(String),

    /// The user declined a confirmation prompt
    #[error("Action aborted.")]
    UserAborted,

    /// SQLite errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BeerusError {
    /// Check if the user declined to continue
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::UserAborted)
    }
}

impl From<std::io::Error> for BeerusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BeerusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for BeerusError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<csv::Error> for BeerusError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for beerus operations
pub type BeerusResult<T> = Result<T, BeerusError>;
