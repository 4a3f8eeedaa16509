//! Referential integrity validation
//!
//! A generic two-batch-by-key operation: keep the fact rows whose foreign
//! key exists in the dimension's business-key set. There is no sensible
//! default for a reference that points at nothing, so orphans are dropped,
//! never repaired. The dimension key set is built once; membership tests
//! are O(1) per fact row.

use std::collections::HashSet;

use log::{info, warn};

use sl_core::batch::Batch;
use sl_core::{CoreError, CoreResult};

/// Outcome of one referential validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrphanStats {
    /// Fact rows examined
    pub checked: usize,

    /// Fact rows dropped for lacking a dimension match
    pub dropped: usize,

    /// Fact rows retained
    pub retained: usize,
}

impl OrphanStats {
    /// Fraction of fact rows dropped (0 for an empty fact batch)
    pub fn dropped_fraction(&self) -> f64 {
        if self.checked == 0 {
            0.0
        } else {
            self.dropped as f64 / self.checked as f64
        }
    }
}

/// Drop fact rows whose foreign key has no matching dimension row
///
/// A fact row with a null foreign key is an orphan too: null references
/// nothing. A missing key *column* in any row is a structural error.
/// The output batch is a strict row subset of the fact input, order
/// preserved.
pub fn filter_orphans(
    fact: &Batch,
    fact_key: &str,
    dim: &Batch,
    dim_key: &str,
) -> CoreResult<(Batch, OrphanStats)> {
    let mut dim_keys: HashSet<&str> = HashSet::with_capacity(dim.len());
    for (idx, row) in dim.rows().iter().enumerate() {
        match row.get(dim_key) {
            None => {
                return Err(CoreError::MissingColumn {
                    entity: "dimension".to_string(),
                    column: dim_key.to_string(),
                    row: idx,
                });
            }
            Some(value) => {
                if let Some(key) = value.as_str() {
                    dim_keys.insert(key);
                }
            }
        }
    }

    let mut retained = Batch::new();
    for (idx, row) in fact.rows().iter().enumerate() {
        let value = row.get(fact_key).ok_or_else(|| CoreError::MissingColumn {
            entity: "fact".to_string(),
            column: fact_key.to_string(),
            row: idx,
        })?;
        if value.as_str().is_some_and(|key| dim_keys.contains(key)) {
            retained.push(row.clone());
        }
    }

    let stats = OrphanStats {
        checked: fact.len(),
        dropped: fact.len() - retained.len(),
        retained: retained.len(),
    };

    if stats.dropped > 0 {
        warn!(
            "Referential integrity: {} rows reference a missing {} ({:.1}%). Removing orphaned records.",
            stats.dropped,
            dim_key,
            stats.dropped_fraction() * 100.0
        );
    } else {
        info!("Referential integrity: all {} references are valid", fact_key);
    }
    info!(
        "Referential integrity check: {}/{} rows retained",
        stats.retained, stats.checked
    );

    Ok((retained, stats))
}

#[cfg(test)]
#[path = "referential_test.rs"]
mod tests;
