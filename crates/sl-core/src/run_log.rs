//! ETL run-log records
//!
//! Every pipeline and audit run ends with one record handed to the
//! external audit sink (the warehouse's `etl_run_log` table). The record
//! carries row-movement counts and an overall status token; it is the
//! only thing the core ever reports upward about a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    /// Run completed with no data-quality issues
    Success,
    /// Run completed but flagged one or more issues
    Warning,
    /// Run aborted on a structural error
    Failed,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::Warning => "WARNING",
            RunStatus::Failed => "FAILED",
        };
        write!(f, "{token}")
    }
}

/// One row of the ETL audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlRunRecord {
    /// Unique identifier for this run
    pub run_id: String,

    /// Pipeline that produced the record (e.g. "etl_daily_pipeline")
    pub pipeline: String,

    /// Logical source the counts refer to
    pub source_name: String,

    /// Rows pulled from the source
    pub records_extracted: usize,

    /// Rows surviving cleaning and validation
    pub records_transformed: usize,

    /// Rows written to the warehouse
    pub records_loaded: usize,

    /// Rows dropped by referential validation (or, for audit runs, the
    /// number of issues found)
    pub records_rejected: usize,

    /// Overall status token
    pub status: RunStatus,

    /// Joined issue text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the record was created
    pub logged_at: DateTime<Utc>,
}

impl EtlRunRecord {
    /// Create a record with a fresh run id and all counts zeroed
    pub fn new(pipeline: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            pipeline: pipeline.into(),
            source_name: source_name.into(),
            records_extracted: 0,
            records_transformed: 0,
            records_loaded: 0,
            records_rejected: 0,
            status: RunStatus::Success,
            error_message: None,
            logged_at: Utc::now(),
        }
    }
}
