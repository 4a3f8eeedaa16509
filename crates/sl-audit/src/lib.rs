//! sl-audit - Warehouse quality auditor for Starload
//!
//! Post-load monitoring that re-derives three data-quality signals
//! directly from the persisted warehouse tables: null rates over critical
//! columns, duplicate business keys, and orphaned foreign keys. Issues
//! are reported as a WARNING audit record, never as a hard failure; only
//! warehouse errors abort an audit run.

pub mod auditor;
pub mod checks;
pub mod config;

pub use auditor::{AuditReport, Auditor};
pub use config::{AuditConfig, ColumnCheck, ReferenceCheck};
