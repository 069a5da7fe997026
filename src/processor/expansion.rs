//! Taxonomy field expansion.
//!
//! Splits the taxonomy field into comma-separated tokens and keeps the last
//! pipe-separated segment of each. Substrings are never trimmed and every
//! token produces exactly one identifier, including empty ones.

use crate::constants::{SEGMENT_DELIMITER, TOKEN_DELIMITER};
use crate::models::{ExpandedRow, SignatureRow};

/// Trailing segment after the last `|`, or the whole token when it has none
pub fn last_segment(token: &str) -> &str {
    token
        .rsplit(SEGMENT_DELIMITER)
        .next()
        .unwrap_or(token)
}

/// Identifiers carried by a taxonomy field, one per comma-separated token
pub fn taxonomy_identifiers(field: &str) -> impl Iterator<Item = &str> {
    field.split(TOKEN_DELIMITER).map(last_segment)
}

/// Expand one signature into a row per taxonomy token
pub fn expand_row(row: &SignatureRow) -> impl Iterator<Item = ExpandedRow> + '_ {
    taxonomy_identifiers(&row.taxonomy_ids).map(move |taxonomy_id| ExpandedRow {
        name: row.name.clone(),
        experiment: row.experiment.clone(),
        source: row.source.clone(),
        description: row.description.clone(),
        abundance: row.abundance.clone(),
        taxonomy_id: taxonomy_id.to_string(),
    })
}
