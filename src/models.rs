//! Core data models for signature expansion.
//!
//! Defines the input row shape, the expanded output row, header resolution
//! and run statistics.

use crate::constants::{OUTPUT_FIELD_COUNT, columns};
use crate::error::{Result, SignatureError};
use csv::StringRecord;
use std::path::PathBuf;

/// One signature read from the input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRow {
    pub name: String,
    pub experiment: String,
    pub source: String,
    pub description: String,
    pub abundance: String,
    pub taxonomy_ids: String,
}

/// One row of the expanded output table
///
/// The first five fields are copied verbatim from the originating
/// [`SignatureRow`]; `taxonomy_id` is the trailing segment of a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedRow {
    pub name: String,
    pub experiment: String,
    pub source: String,
    pub description: String,
    pub abundance: String,
    pub taxonomy_id: String,
}

impl ExpandedRow {
    /// Fields in output order
    pub fn fields(&self) -> [&str; OUTPUT_FIELD_COUNT] {
        [
            self.name.as_str(),
            self.experiment.as_str(),
            self.source.as_str(),
            self.description.as_str(),
            self.abundance.as_str(),
            self.taxonomy_id.as_str(),
        ]
    }
}

/// Positions of the required columns within the input header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: usize,
    pub experiment: usize,
    pub source: usize,
    pub description: usize,
    pub abundance: usize,
    pub taxonomy_ids: usize,
}

impl ColumnMapping {
    /// Resolve required columns by name
    ///
    /// Column order is irrelevant and extra columns are ignored. When a name
    /// appears more than once the last occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |field: &str| -> Result<usize> {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == field)
                .map(|(index, _)| index)
                .last()
                .ok_or_else(|| SignatureError::missing_field(field, 1))
        };

        Ok(Self {
            name: find(columns::SIGNATURE_NAME)?,
            experiment: find(columns::EXPERIMENT)?,
            source: find(columns::SOURCE)?,
            description: find(columns::DESCRIPTION)?,
            abundance: find(columns::ABUNDANCE)?,
            taxonomy_ids: find(columns::TAXONOMY_IDS)?,
        })
    }

    /// Build a [`SignatureRow`] from a data record
    ///
    /// `line` is the 1-based line number used in diagnostics when the record
    /// is too short to hold a required column.
    pub fn extract(&self, record: &StringRecord, line: u64) -> Result<SignatureRow> {
        let get = |index: usize, field: &str| -> Result<String> {
            record
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| SignatureError::missing_field(field, line))
        };

        Ok(SignatureRow {
            name: get(self.name, columns::SIGNATURE_NAME)?,
            experiment: get(self.experiment, columns::EXPERIMENT)?,
            source: get(self.source, columns::SOURCE)?,
            description: get(self.description, columns::DESCRIPTION)?,
            abundance: get(self.abundance, columns::ABUNDANCE)?,
            taxonomy_ids: get(self.taxonomy_ids, columns::TAXONOMY_IDS)?,
        })
    }
}

/// Summary of a completed expansion run
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    pub rows_read: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}
