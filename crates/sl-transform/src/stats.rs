//! Per-cleaner diagnostics

use serde::Serialize;

/// Counts of what one cleaner touched in one batch
///
/// Data anomalies never fail a cleaner; these counters are how the
/// repairs stay observable. `duplicates_removed` is always
/// `raw_rows - output_rows` and is distinct from the pipeline's rejected
/// count, which tracks referential drops only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    /// Rows in the raw batch
    pub raw_rows: usize,

    /// Rows in the cleaned batch
    pub output_rows: usize,

    /// Rows removed by business-key deduplication
    pub duplicates_removed: usize,

    /// Null cells filled with a policy default
    pub defaults_applied: usize,

    /// Values coerced into a closed vocabulary or range
    pub values_coerced: usize,

    /// Timestamps that failed to parse and nulled their derived columns
    pub unparseable_timestamps: usize,
}
