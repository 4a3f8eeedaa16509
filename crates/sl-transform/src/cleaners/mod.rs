//! Entity cleaners
//!
//! One side-effect-free cleaner per source entity. Each follows the same
//! skeleton: validate the batch shape (structural, fail-fast), then
//! deduplicate by business key, repair required-but-null fields,
//! standardize categorical text, and derive computed columns. All repairs
//! are counted in [`CleanStats`].

mod customers;
mod orders;
mod reviews;

pub use customers::clean_customers;
pub use orders::clean_orders;
pub use reviews::clean_reviews;

use std::collections::HashSet;

use sl_core::batch::{Batch, Row};

use crate::stats::CleanStats;

/// A cleaned batch together with its repair diagnostics
#[derive(Debug, Clone)]
pub struct Cleaned {
    /// The cleaned rows
    pub batch: Batch,

    /// What the cleaner touched
    pub stats: CleanStats,
}

/// Deduplicate rows by a business-key column, keeping the first occurrence
///
/// Row order is otherwise preserved. Null or missing keys are one
/// duplicate class of their own: the first keyless row survives.
pub(crate) fn dedup_by_key(batch: &Batch, key_column: &str) -> (Vec<Row>, usize) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut seen_null = false;
    let mut rows = Vec::with_capacity(batch.len());

    for row in batch.rows() {
        let keep = match row.get(key_column).and_then(|v| v.as_str()) {
            Some(key) => seen.insert(key.to_string()),
            None => {
                let first = !seen_null;
                seen_null = true;
                first
            }
        };
        if keep {
            rows.push(row.clone());
        }
    }

    let removed = batch.len() - rows.len();
    (rows, removed)
}
