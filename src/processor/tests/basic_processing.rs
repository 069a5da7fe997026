//! Basic processing integration tests

use super::{HEADER, write_signatures};
use crate::config::{ExpanderConfig, LineTerminator};
use crate::processor::{SignatureProcessor, expand_stream};
use std::fs;
use tempfile::TempDir;

fn processor_for(temp_dir: &TempDir, rows: &str) -> SignatureProcessor {
    let input_path = write_signatures(temp_dir.path(), rows);
    let config = ExpanderConfig::default()
        .with_input_path(input_path)
        .with_output_path(temp_dir.path().join("signatures_fixed.csv"))
        .with_progress(false);
    SignatureProcessor::new(config).unwrap()
}

#[test]
fn test_basic_processing_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor_for(&temp_dir, "SIG1,E1,S1,D1,0.5,\"1|A,2|B|C\"\n");

    let stats = processor.process().unwrap();

    assert_eq!(stats.rows_read, 1);
    assert_eq!(stats.rows_written, 2);
    assert_eq!(stats.output_path, temp_dir.path().join("signatures_fixed.csv"));

    let output = fs::read_to_string(&stats.output_path).unwrap();
    assert_eq!(output, "SIG1,E1,S1,D1,0.5,A\r\nSIG1,E1,S1,D1,0.5,C\r\n");
}

#[test]
fn test_row_count_is_sum_of_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor_for(
        &temp_dir,
        "SIG1,E1,S1,D1,0.5,9606\n\
         SIG2,E2,S2,D2,0.1,\"9606,10090,10116\"\n\
         SIG3,E3,S3,D3,0.9,\"1|a,2|b\"\n",
    );

    let stats = processor.process().unwrap();

    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_written, 1 + 3 + 2);
}

#[test]
fn test_output_preserves_input_order() {
    let input = format!(
        "{}SIG1,E1,S1,D1,0.5,\"9606|Homo sapiens,10090\"\nSIG2,E2,S2,D2,0.2,\"9606,10090\"\n",
        HEADER
    );
    let mut output = Vec::new();

    expand_stream(input.as_bytes(), &mut output, LineTerminator::Lf).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "SIG1,E1,S1,D1,0.5,Homo sapiens\n\
         SIG1,E1,S1,D1,0.5,10090\n\
         SIG2,E2,S2,D2,0.2,9606\n\
         SIG2,E2,S2,D2,0.2,10090\n"
    );
}

#[test]
fn test_quoted_fields_survive_round_trip() {
    let input = format!(
        "{}\"SIG, one\",E1,S1,\"Line \"\"quoted\"\"\",0.5,9606\n",
        HEADER
    );
    let mut output = Vec::new();

    expand_stream(input.as_bytes(), &mut output, LineTerminator::Crlf).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\"SIG, one\",E1,S1,\"Line \"\"quoted\"\"\",0.5,9606\r\n"
    );
}

#[test]
fn test_empty_taxonomy_field_emits_one_row() {
    let input = format!("{}SIG1,E1,S1,D1,0.5,\n", HEADER);
    let mut output = Vec::new();

    let stats = expand_stream(input.as_bytes(), &mut output, LineTerminator::Lf).unwrap();

    assert_eq!(stats.rows_written, 1);
    assert_eq!(String::from_utf8(output).unwrap(), "SIG1,E1,S1,D1,0.5,\n");
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor_for(
        &temp_dir,
        "SIG1,E1,S1,D1,0.5,\"1|A,2|B|C\"\nSIG2,E2,S2,D2,0.7,\"9606,10090\"\n",
    );

    processor.process().unwrap();
    let first = fs::read(&processor.config().output_path).unwrap();
    processor.process().unwrap();
    let second = fs::read(&processor.config().output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor_for(&temp_dir, "SIG1,E1,S1,D1,0.5,9606\n");
    fs::write(
        &processor.config().output_path,
        "stale content that is longer than the new output\n",
    )
    .unwrap();

    processor.process().unwrap();

    let output = fs::read_to_string(&processor.config().output_path).unwrap();
    assert_eq!(output, "SIG1,E1,S1,D1,0.5,9606\r\n");
}

#[test]
fn test_input_file_is_not_modified() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor_for(&temp_dir, "SIG1,E1,S1,D1,0.5,\"1|A,2|B\"\n");
    let before = fs::read(&processor.config().input_path).unwrap();

    processor.process().unwrap();

    let after = fs::read(&processor.config().input_path).unwrap();
    assert_eq!(before, after);
}
