//! Error handling for signature expansion.
//!
//! Every failure aborts the run; variants carry enough context (path, column,
//! line) to produce a useful diagnostic on stderr.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found or unreadable: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing field '{field}' at line {line}")]
    MissingField { field: String, line: u64 },

    #[error("Failed to write output file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SignatureError {
    /// Create a missing field error for the given column and line
    pub fn missing_field(field: impl Into<String>, line: u64) -> Self {
        Self::MissingField {
            field: field.into(),
            line,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Convert a CSV writer error into a write error against `path`
    pub fn write(path: impl Into<PathBuf>, error: csv::Error) -> Self {
        let source = match error.into_kind() {
            csv::ErrorKind::Io(io) => io,
            other => std::io::Error::other(format!("{:?}", other)),
        };
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SignatureError>;
