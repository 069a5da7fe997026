//! Command-line interface components.
//!
//! Every flag is optional: invoking the binary with no arguments reads
//! `signatures.csv` and writes `signatures_fixed.csv` in the working
//! directory.

use crate::config::{ExpanderConfig, LineTerminator};
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::models::ProcessingStats;
use crate::processor::{SignatureProcessor, print_summary};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "signature_expander")]
#[command(about = "Expand NCBI taxonomy columns in signature tables to one row per organism")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Signature table to read
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Expanded table to write (overwritten if present)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Line terminator for output rows
    #[arg(long, value_enum, default_value = "crlf")]
    pub line_terminator: TerminatorArg,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Line terminator choices exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TerminatorArg {
    /// `\r\n`
    Crlf,
    /// `\n`
    Lf,
}

impl From<TerminatorArg> for LineTerminator {
    fn from(arg: TerminatorArg) -> Self {
        match arg {
            TerminatorArg::Crlf => LineTerminator::Crlf,
            TerminatorArg::Lf => LineTerminator::Lf,
        }
    }
}

impl Args {
    /// Build the run configuration from defaults overlaid with flags
    pub fn to_config(&self) -> ExpanderConfig {
        ExpanderConfig::default()
            .with_input_path(&self.input)
            .with_output_path(&self.output)
            .with_line_terminator(self.line_terminator.into())
            .with_progress(!self.quiet && !self.no_progress)
    }

    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("signature_expander={}", log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the expander with parsed arguments
pub fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    let processor = SignatureProcessor::new(config).context("Invalid configuration")?;

    let stats = processor.process().with_context(|| {
        format!(
            "Failed to expand {}",
            processor.config().input_path.display()
        )
    })?;

    if !args.quiet {
        print_summary(&stats);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arguments_use_default_files() {
        let args = Args::try_parse_from(["signature_expander"]).unwrap();
        let config = args.to_config();

        assert_eq!(config.input_path, PathBuf::from("signatures.csv"));
        assert_eq!(config.output_path, PathBuf::from("signatures_fixed.csv"));
        assert_eq!(config.line_terminator, LineTerminator::Crlf);
        assert!(config.show_progress);
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "signature_expander",
            "--input",
            "in.csv",
            "-o",
            "out.csv",
            "--line-terminator",
            "lf",
            "-vv",
        ])
        .unwrap();
        let config = args.to_config();

        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.line_terminator, LineTerminator::Lf);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_disables_progress() {
        let args = Args::try_parse_from(["signature_expander", "-q"]).unwrap();

        assert!(!args.to_config().show_progress);
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["signature_expander", "-q", "-v"]).is_err());
    }
}
