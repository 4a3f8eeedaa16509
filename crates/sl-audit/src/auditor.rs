//! Audit execution
//!
//! Runs the configured checks against the warehouse and folds their
//! findings into one report. The three check classes are independent and
//! share no state beyond the warehouse handle, so callers may also await
//! them concurrently. Data issues produce a WARNING report; only
//! warehouse errors (a missing table, a dead connection) propagate.

use log::info;

use sl_core::run_log::{EtlRunRecord, RunStatus};
use sl_db::{DbResult, Warehouse};

use crate::checks::{duplicate_key_sql, null_count_sql, orphan_count_sql, row_count_sql};
use crate::config::AuditConfig;

/// Outcome of one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Human-readable issue descriptions, in check order
    /// (null rates, then duplicates, then orphans)
    pub issues: Vec<String>,

    /// SUCCESS when no issues were found, WARNING otherwise
    pub status: RunStatus,
}

impl AuditReport {
    fn from_issues(issues: Vec<String>) -> Self {
        let status = if issues.is_empty() {
            RunStatus::Success
        } else {
            RunStatus::Warning
        };
        Self { issues, status }
    }

    /// Build the run-log record for this audit run
    ///
    /// Audit runs move no rows; `records_rejected` carries the issue
    /// count and `error_message` the joined issue list, matching what the
    /// audit sink expects.
    pub fn into_run_record(
        self,
        pipeline: impl Into<String>,
        source_name: impl Into<String>,
    ) -> EtlRunRecord {
        let mut record = EtlRunRecord::new(pipeline, source_name);
        record.records_rejected = self.issues.len();
        record.status = self.status;
        record.error_message = if self.issues.is_empty() {
            None
        } else {
            Some(self.issues.join("; "))
        };
        record
    }
}

/// Warehouse quality auditor
pub struct Auditor<'a> {
    warehouse: &'a dyn Warehouse,
    config: AuditConfig,
}

impl<'a> Auditor<'a> {
    /// Create an auditor over a warehouse handle
    pub fn new(warehouse: &'a dyn Warehouse, config: AuditConfig) -> Self {
        Self { warehouse, config }
    }

    /// Check null rates per configured column
    ///
    /// An empty table has a null rate of 0 for every column: nothing is
    /// flagged and nothing divides by zero.
    pub async fn check_null_rates(&self) -> DbResult<Vec<String>> {
        let mut issues = Vec::new();
        for check in &self.config.null_checks {
            let total = self.warehouse.query_scalar(&row_count_sql(&check.table)).await?;
            let nulls = if total > 0 {
                self.warehouse
                    .query_scalar(&null_count_sql(&check.table, &check.column))
                    .await?
            } else {
                0
            };
            let null_rate = if total > 0 {
                nulls as f64 / total as f64
            } else {
                0.0
            };
            info!(
                "  {}.{}: {}/{} nulls ({:.1}%)",
                check.table,
                check.column,
                nulls,
                total,
                null_rate * 100.0
            );
            if null_rate > self.config.null_rate_threshold {
                issues.push(format!(
                    "{}.{} has {:.1}% nulls",
                    check.table,
                    check.column,
                    null_rate * 100.0
                ));
            }
        }
        info!("Null check complete - {} issues found", issues.len());
        Ok(issues)
    }

    /// Check for duplicated business keys per configured table
    pub async fn check_duplicates(&self) -> DbResult<Vec<String>> {
        let mut issues = Vec::new();
        for check in &self.config.duplicate_checks {
            let dupes = self
                .warehouse
                .query_scalar(&duplicate_key_sql(&check.table, &check.column))
                .await?;
            info!("  {}: {} duplicate {}s", check.table, dupes, check.column);
            if dupes > 0 {
                issues.push(format!(
                    "{} has {} duplicate {}s",
                    check.table, dupes, check.column
                ));
            }
        }
        info!("Duplicate check complete - {} issues found", issues.len());
        Ok(issues)
    }

    /// Check fact-to-dimension relationships for orphans
    pub async fn check_orphans(&self) -> DbResult<Vec<String>> {
        let mut issues = Vec::new();
        for check in &self.config.orphan_checks {
            let orphans = self
                .warehouse
                .query_scalar(&orphan_count_sql(
                    &check.fact_table,
                    &check.fact_column,
                    &check.dim_table,
                    &check.dim_column,
                ))
                .await?;
            info!(
                "  {}.{} -> {}.{}: {} orphans",
                check.fact_table, check.fact_column, check.dim_table, check.dim_column, orphans
            );
            if orphans > 0 {
                issues.push(format!(
                    "{} rows in {} have orphaned {} (no match in {})",
                    orphans, check.fact_table, check.fact_column, check.dim_table
                ));
            }
        }
        info!(
            "Referential integrity check complete - {} issues found",
            issues.len()
        );
        Ok(issues)
    }

    /// Run all three checks and aggregate their findings
    pub async fn run(&self) -> DbResult<AuditReport> {
        let mut issues = self.check_null_rates().await?;
        issues.extend(self.check_duplicates().await?);
        issues.extend(self.check_orphans().await?);

        let report = AuditReport::from_issues(issues);
        info!(
            "Audit complete - status: {}, issues: {}",
            report.status,
            report.issues.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "auditor_test.rs"]
mod tests;
