//! Transform pipeline composition
//!
//! Cleans the three entity batches (they have no interdependency) and
//! then validates orders against customers. This module owns no cleaning
//! rules of its own, but it does own the rejection accounting: the
//! rejected count is exactly the rows the referential validator removed,
//! never the in-cleaner dedup removals.

use log::info;

use sl_core::batch::Batch;
use sl_core::policy::CleanPolicy;
use sl_core::run_log::EtlRunRecord;
use sl_core::CoreResult;

use crate::cleaners::{clean_customers, clean_orders, clean_reviews};
use crate::referential::{filter_orphans, OrphanStats};
use crate::stats::CleanStats;

/// Final batches and counters of one transform run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Cleaned, referentially valid orders
    pub orders: Batch,

    /// Cleaned customers
    pub customers: Batch,

    /// Cleaned reviews
    pub reviews: Batch,

    /// Orders dropped by referential validation
    pub rejected_orders: usize,

    /// Orders cleaner diagnostics
    pub order_stats: CleanStats,

    /// Customers cleaner diagnostics
    pub customer_stats: CleanStats,

    /// Reviews cleaner diagnostics
    pub review_stats: CleanStats,

    /// Referential validation counters
    pub referential: OrphanStats,
}

impl PipelineOutcome {
    /// Build the run-log record for this transform run
    ///
    /// `records_loaded` stays zero; loading happens downstream and the
    /// loader updates its own count.
    pub fn run_record(
        &self,
        pipeline: impl Into<String>,
        source_name: impl Into<String>,
    ) -> EtlRunRecord {
        let mut record = EtlRunRecord::new(pipeline, source_name);
        record.records_extracted = self.order_stats.raw_rows
            + self.customer_stats.raw_rows
            + self.review_stats.raw_rows;
        record.records_transformed =
            self.orders.len() + self.customers.len() + self.reviews.len();
        record.records_rejected = self.rejected_orders;
        record
    }
}

/// Clean all three raw batches and enforce referential integrity
///
/// Fails only on structurally wrong input (missing column, wrong type);
/// data anomalies are repaired or dropped with diagnostics in the
/// returned stats.
pub fn run_pipeline(
    raw_orders: &Batch,
    raw_customers: &Batch,
    raw_reviews: &Batch,
    policy: &CleanPolicy,
) -> CoreResult<PipelineOutcome> {
    let orders = clean_orders(raw_orders, policy)?;
    let customers = clean_customers(raw_customers, policy)?;
    let reviews = clean_reviews(raw_reviews, policy)?;

    let cleaned_order_count = orders.batch.len();
    let (valid_orders, referential) =
        filter_orphans(&orders.batch, "customer_id", &customers.batch, "customer_id")?;
    let rejected_orders = cleaned_order_count - valid_orders.len();

    info!(
        "Transform complete - orders: {}, customers: {}, reviews: {}, rejected: {}",
        valid_orders.len(),
        customers.batch.len(),
        reviews.batch.len(),
        rejected_orders
    );

    Ok(PipelineOutcome {
        orders: valid_orders,
        customers: customers.batch,
        reviews: reviews.batch,
        rejected_orders,
        order_stats: orders.stats,
        customer_stats: customers.stats,
        review_stats: reviews.stats,
        referential,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
