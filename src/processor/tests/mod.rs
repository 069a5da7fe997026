//! Integration tests for the processor module
//!
//! Tests the complete read-expand-write pass against temporary signature
//! tables.

pub mod basic_processing;

use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "Signature page name,Experiment,Source,Description,Abundance in Group 1,NCBI Taxonomy IDs\n";

/// Helper to write a signature table with the standard header
pub fn write_signatures(dir: &Path, rows: &str) -> PathBuf {
    let path = dir.join("signatures.csv");
    std::fs::write(&path, format!("{}{}", HEADER, rows)).unwrap();
    path
}
