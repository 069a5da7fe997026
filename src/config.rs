//! Configuration management and validation.
//!
//! Provides the settings for a single expansion run: where to read, where to
//! write, and how output lines are terminated.

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::error::{Result, SignatureError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Line terminator for the output table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineTerminator {
    /// `\r\n`, what Python-style CSV writers emit by default
    Crlf,
    /// `\n`
    Lf,
}

impl LineTerminator {
    /// Convert to the csv crate terminator
    pub fn to_csv_terminator(self) -> csv::Terminator {
        match self {
            LineTerminator::Crlf => csv::Terminator::CRLF,
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

/// Settings for one expansion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpanderConfig {
    /// Header-having signature table to read
    pub input_path: PathBuf,

    /// Header-less expanded table to create or overwrite
    pub output_path: PathBuf,

    /// Terminator written after every output row
    pub line_terminator: LineTerminator,

    /// Show a progress spinner while rows are processed
    pub show_progress: bool,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            line_terminator: LineTerminator::Crlf,
            show_progress: true,
        }
    }
}

impl ExpanderConfig {
    /// Create configuration with a custom input file
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Create configuration with a custom output file
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Create configuration with a custom line terminator
    pub fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Validate the configuration
    ///
    /// Reading and writing the same file would truncate the input before it
    /// is read, so identical paths are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(SignatureError::configuration("Input path must not be empty"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(SignatureError::configuration("Output path must not be empty"));
        }

        let same_file = match (
            self.input_path.canonicalize(),
            self.output_path.canonicalize(),
        ) {
            (Ok(input), Ok(output)) => input == output,
            _ => self.input_path == self.output_path,
        };

        if same_file {
            return Err(SignatureError::configuration(format!(
                "Input and output refer to the same file: {}",
                self.input_path.display()
            )));
        }

        debug!(
            "Configuration validated: {} -> {}",
            self.input_path.display(),
            self.output_path.display()
        );
        Ok(())
    }
}
