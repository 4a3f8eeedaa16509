//! sl-core - Core library for Starload
//!
//! This crate provides the shared types used across the Starload ETL
//! pipeline: dynamic tabular batches, schema descriptors, the cleaning
//! policy, timestamp parsing, run-log records, and SQL quoting utilities.

pub mod batch;
pub mod error;
pub mod policy;
pub mod run_log;
pub mod schema;
pub mod sql_utils;
pub mod timeparse;

pub use batch::{Batch, Row};
pub use error::{CoreError, CoreResult};
pub use policy::CleanPolicy;
pub use run_log::{EtlRunRecord, RunStatus};
pub use schema::{customers_schema, orders_schema, reviews_schema, BatchSchema, FieldSpec, FieldType};
pub use timeparse::parse_timestamp;
