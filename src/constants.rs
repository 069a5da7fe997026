//! Application constants for the signature expander
//!
//! File locations, required column names and the delimiters used to break
//! the taxonomy field apart.

// =============================================================================
// File Locations
// =============================================================================

/// Input file read when no path is given, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "signatures.csv";

/// Output file written when no path is given, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "signatures_fixed.csv";

// =============================================================================
// Column Names
// =============================================================================

/// Header names looked up in the input table
pub mod columns {
    pub const SIGNATURE_NAME: &str = "Signature page name";
    pub const EXPERIMENT: &str = "Experiment";
    pub const SOURCE: &str = "Source";
    pub const DESCRIPTION: &str = "Description";
    pub const ABUNDANCE: &str = "Abundance in Group 1";
    pub const TAXONOMY_IDS: &str = "NCBI Taxonomy IDs";

    /// Every column a row must carry, in output order
    pub const REQUIRED: [&str; 6] = [
        SIGNATURE_NAME,
        EXPERIMENT,
        SOURCE,
        DESCRIPTION,
        ABUNDANCE,
        TAXONOMY_IDS,
    ];
}

// =============================================================================
// Delimiters
// =============================================================================

/// Separates taxonomy tokens inside the taxonomy field
pub const TOKEN_DELIMITER: char = ',';

/// Separates metadata segments inside a single token
pub const SEGMENT_DELIMITER: char = '|';

/// Field delimiter for both the input and output tables
pub const FIELD_DELIMITER: u8 = b',';

/// Number of fields in every expanded output row
pub const OUTPUT_FIELD_COUNT: usize = 6;

// =============================================================================
// Progress Reporting
// =============================================================================

/// Rows between progress spinner refreshes
pub const PROGRESS_UPDATE_INTERVAL: u64 = 1_000;
