//! sl-transform - Transform & validation core for Starload
//!
//! This crate owns the only nontrivial logic in the pipeline: the three
//! entity cleaners (orders, customers, reviews), the generic referential
//! validator, and the pipeline that composes them. Cleaners repair or
//! coerce bad data and count what they touched; they raise only on
//! structurally wrong batches. Orphan fact rows are dropped, never
//! repaired.

pub mod cleaners;
pub mod pipeline;
pub mod referential;
pub mod stats;

pub use cleaners::{clean_customers, clean_orders, clean_reviews, Cleaned};
pub use pipeline::{run_pipeline, PipelineOutcome};
pub use referential::{filter_orphans, OrphanStats};
pub use stats::CleanStats;
