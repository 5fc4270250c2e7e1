//! Error types for coordinate conversion
//!
//! A single error enum is shared by the projection layer, the record
//! reader/writer and the CLI commands.

use std::io;
use thiserror::Error;

/// Errors raised while converting coordinates
#[derive(Error, Debug)]
pub enum ConvertError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Non-numeric or incomplete coordinate input
    #[error("Parse error: {0}")]
    Parse(String),
    /// Input file does not exist
    #[error("Input file does not exist: {0}")]
    NotFound(String),
    /// Input rejected before any processing
    #[error("Validation error: {0}")]
    Validation(String),
    /// Malformed configuration file
    #[error("Configuration error: {0}")]
    Config(String),
    /// Arguments that select no conversion mode
    #[error("{0}")]
    Usage(String),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Build a parse error for a value that is not a number
    pub fn invalid_number(label: &str, value: &str) -> Self {
        ConvertError::Parse(format!("Invalid {} value: '{}'", label, value))
    }
}
