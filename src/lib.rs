//! Signature Expander Library
//!
//! Expands the multi-valued `NCBI Taxonomy IDs` column of a signature table
//! into one row per organism.
//!
//! For every input row and every comma-separated token in its taxonomy field,
//! one header-less output row is written carrying the signature name,
//! experiment, source, description and abundance verbatim, followed by the
//! last `|`-separated segment of the token.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;

// Re-export commonly used types
pub use config::{ExpanderConfig, LineTerminator};
pub use error::{Result, SignatureError};
pub use models::{ExpandedRow, ProcessingStats, SignatureRow};
pub use processor::{SignatureProcessor, expand_stream};
