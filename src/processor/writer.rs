//! Expanded table writer.
//!
//! Writes header-less, minimally quoted CSV rows. Every failure is reported
//! against the output path so the diagnostic names the file that could not
//! be written.

use crate::config::LineTerminator;
use crate::constants::FIELD_DELIMITER;
use crate::error::{Result, SignatureError};
use crate::models::ExpandedRow;

use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writer for expanded signature rows
#[derive(Debug)]
pub struct SignatureWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
    rows_written: usize,
}

impl SignatureWriter<File> {
    /// Create or truncate the output file
    pub fn create(path: &Path, terminator: LineTerminator) -> Result<Self> {
        let file = File::create(path).map_err(|source| SignatureError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_path(file, path.to_path_buf(), terminator))
    }
}

impl<W: Write> SignatureWriter<W> {
    /// Wrap an arbitrary stream
    pub fn new(output: W, terminator: LineTerminator) -> Self {
        Self::with_path(output, PathBuf::from("<stream>"), terminator)
    }

    fn with_path(output: W, path: PathBuf, terminator: LineTerminator) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(terminator.to_csv_terminator())
            .from_writer(output);

        Self {
            writer,
            path,
            rows_written: 0,
        }
    }

    /// Write a single expanded row
    pub fn write_row(&mut self, row: &ExpandedRow) -> Result<()> {
        self.writer
            .write_record(row.fields())
            .map_err(|e| SignatureError::write(&self.path, e))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows and hand back the underlying stream
    pub fn finish(self) -> Result<W> {
        let path = self.path;
        self.writer.into_inner().map_err(|e| SignatureError::Write {
            path,
            source: e.into_error(),
        })
    }
}
