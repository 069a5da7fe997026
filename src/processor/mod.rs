//! Main processing engine.
//!
//! Orchestrates a single read-expand-write pass: open and validate the input,
//! create the output, then stream every signature through
//! [`expansion::expand_row`] in file order.

pub mod expansion;
pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{expansion::expand_row, reader::SignatureReader, writer::SignatureWriter};

use crate::config::{ExpanderConfig, LineTerminator};
use crate::constants::PROGRESS_UPDATE_INTERVAL;
use crate::error::Result;
use crate::models::ProcessingStats;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{Read, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Processor for a signature table on disk
#[derive(Debug)]
pub struct SignatureProcessor {
    config: ExpanderConfig,
}

impl SignatureProcessor {
    /// Create a new processor, validating the configuration
    pub fn new(config: ExpanderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    /// Main processing entry point
    ///
    /// The input is opened and its header resolved before the output file is
    /// created, so a missing input or column leaves any existing output
    /// untouched.
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        info!(
            "Expanding {} -> {}",
            self.config.input_path.display(),
            self.config.output_path.display()
        );

        let reader = SignatureReader::from_path(&self.config.input_path)?;
        let writer =
            SignatureWriter::create(&self.config.output_path, self.config.line_terminator)?;

        let progress = self.progress_bar();
        let mut stats = expand_with_progress(reader, writer, &progress)?;

        stats.output_path = self.config.output_path.clone();
        stats.processing_time_ms = start_time.elapsed().as_millis();

        info!(
            "Expanded {} signatures into {} rows in {}ms",
            stats.rows_read, stats.rows_written, stats.processing_time_ms
        );
        Ok(stats)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} signatures {msg}")
        {
            progress_bar.set_style(style);
        }
        progress_bar
    }
}

/// Expand a signature stream into an expanded stream
///
/// Stream-based counterpart of [`SignatureProcessor::process`]; the header is
/// resolved before anything is written to `output`.
pub fn expand_stream<R: Read, W: Write>(
    input: R,
    output: W,
    terminator: LineTerminator,
) -> Result<ProcessingStats> {
    let reader = SignatureReader::new(input)?;
    let writer = SignatureWriter::new(output, terminator);
    expand_signatures(reader, writer, &ProgressBar::hidden())
}

/// Run the expansion and clear the spinner whether or not it succeeded
fn expand_with_progress<R: Read, W: Write>(
    reader: SignatureReader<R>,
    writer: SignatureWriter<W>,
    progress: &ProgressBar,
) -> Result<ProcessingStats> {
    let result = expand_signatures(reader, writer, progress);
    progress.finish_and_clear();
    result
}

fn expand_signatures<R: Read, W: Write>(
    mut reader: SignatureReader<R>,
    mut writer: SignatureWriter<W>,
    progress: &ProgressBar,
) -> Result<ProcessingStats> {
    let mut rows_read = 0usize;

    for row in reader.rows() {
        let row = row?;
        rows_read += 1;

        for expanded in expand_row(&row) {
            writer.write_row(&expanded)?;
        }
        debug!(
            "Signature '{}' expanded to {} rows so far",
            row.name,
            writer.rows_written()
        );

        if rows_read as u64 % PROGRESS_UPDATE_INTERVAL == 0 {
            progress.set_position(rows_read as u64);
        }
    }

    progress.set_position(rows_read as u64);
    let rows_written = writer.rows_written();
    writer.finish()?;

    Ok(ProcessingStats {
        rows_read,
        rows_written,
        ..Default::default()
    })
}

/// Print a human-readable summary of a completed run
pub fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Expansion Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Signatures read:".bright_cyan(),
        stats.rows_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Rows written:".bright_cyan(),
        stats.rows_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );
}
