//! Signature table reader.
//!
//! Wraps a header-having CSV reader, resolves the required columns once and
//! yields one [`SignatureRow`] per data record.

use crate::constants::FIELD_DELIMITER;
use crate::error::{Result, SignatureError};
use crate::models::{ColumnMapping, SignatureRow};

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reader over a signature table
#[derive(Debug)]
pub struct SignatureReader<R> {
    reader: csv::Reader<R>,
    mapping: ColumnMapping,
}

impl SignatureReader<File> {
    /// Open a signature table on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SignatureError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened input file: {}", path.display());
        Self::new(file)
    }
}

impl<R: Read> SignatureReader<R> {
    /// Wrap a stream and resolve its header
    ///
    /// Fails with [`SignatureError::MissingField`] if the header lacks a
    /// required column, before any data row is read.
    pub fn new(input: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let mapping = ColumnMapping::from_headers(reader.headers()?)?;
        debug!("Resolved signature columns: {:?}", mapping);

        Ok(Self { reader, mapping })
    }

    /// Resolved column positions
    pub fn mapping(&self) -> ColumnMapping {
        self.mapping
    }

    /// Iterate over the data rows in file order
    pub fn rows(&mut self) -> SignatureRows<'_, R> {
        SignatureRows {
            records: self.reader.records(),
            mapping: self.mapping,
            records_seen: 0,
        }
    }
}

/// Iterator returned by [`SignatureReader::rows`]
pub struct SignatureRows<'r, R> {
    records: csv::StringRecordsIter<'r, R>,
    mapping: ColumnMapping,
    records_seen: u64,
}

impl<R: Read> Iterator for SignatureRows<'_, R> {
    type Item = Result<SignatureRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record: StringRecord = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.records_seen += 1;
        // Header is line 1, so the n-th record starts no earlier than line n + 1
        let line = record_line(&record, self.records_seen + 1);
        Some(self.mapping.extract(&record, line))
    }
}

/// Line a record started on, or `fallback` for records built without a position
fn record_line(record: &StringRecord, fallback: u64) -> u64 {
    record.position().map_or(fallback, |p| p.line())
}
