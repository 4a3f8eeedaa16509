//! Warehouse trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Read-mostly warehouse abstraction for the quality auditor
///
/// Implementations must be Send + Sync; the auditor's three checks are
/// independent and may run concurrently over one shared handle.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Execute one or more SQL statements (DDL, seed data)
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a query and return the first column of its first row
    ///
    /// The auditor's checks are all COUNT queries, so a missing row is an
    /// error, not a zero.
    async fn query_scalar(&self, sql: &str) -> DbResult<i64>;

    /// Backend identifier for logging
    fn db_type(&self) -> &'static str;
}
