//! Audit configuration
//!
//! The check lists default to the warehouse's star schema (fact_orders
//! and its dimensions) but are plain data, so deployments can point the
//! auditor at any tables from YAML.

use serde::{Deserialize, Serialize};

use sl_core::CoreResult;

/// A (table, column) pair for null-rate and duplicate checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCheck {
    /// Table to probe
    pub table: String,

    /// Column (or business-key column) to probe
    pub column: String,
}

impl ColumnCheck {
    /// Create a column check
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// A fact-to-dimension foreign-key relationship to verify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCheck {
    /// Fact table holding the foreign key
    pub fact_table: String,

    /// Foreign-key column in the fact table
    pub fact_column: String,

    /// Dimension table being referenced
    pub dim_table: String,

    /// Key column in the dimension table
    pub dim_column: String,
}

impl ReferenceCheck {
    /// Create a reference check
    pub fn new(
        fact_table: impl Into<String>,
        fact_column: impl Into<String>,
        dim_table: impl Into<String>,
        dim_column: impl Into<String>,
    ) -> Self {
        Self {
            fact_table: fact_table.into(),
            fact_column: fact_column.into(),
            dim_table: dim_table.into(),
            dim_column: dim_column.into(),
        }
    }
}

/// What the auditor probes and when a null rate becomes an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Null fraction above which a column is flagged (0.05 = 5%)
    #[serde(default = "default_null_rate_threshold")]
    pub null_rate_threshold: f64,

    /// Columns checked for null rate
    #[serde(default = "default_null_checks")]
    pub null_checks: Vec<ColumnCheck>,

    /// Business keys checked for duplicates
    #[serde(default = "default_duplicate_checks")]
    pub duplicate_checks: Vec<ColumnCheck>,

    /// Foreign keys checked for orphans
    #[serde(default = "default_orphan_checks")]
    pub orphan_checks: Vec<ReferenceCheck>,
}

fn default_null_rate_threshold() -> f64 {
    0.05
}

fn default_null_checks() -> Vec<ColumnCheck> {
    vec![
        ColumnCheck::new("fact_orders", "order_id"),
        ColumnCheck::new("fact_orders", "customer_key"),
        ColumnCheck::new("fact_orders", "date_key"),
        ColumnCheck::new("fact_orders", "total_amount"),
        ColumnCheck::new("dim_customers", "customer_id"),
        ColumnCheck::new("dim_customers", "email"),
        ColumnCheck::new("dim_products", "product_id"),
    ]
}

fn default_duplicate_checks() -> Vec<ColumnCheck> {
    vec![
        ColumnCheck::new("fact_orders", "order_id"),
        ColumnCheck::new("dim_customers", "customer_id"),
        ColumnCheck::new("dim_products", "product_id"),
    ]
}

fn default_orphan_checks() -> Vec<ReferenceCheck> {
    vec![
        ReferenceCheck::new("fact_orders", "customer_key", "dim_customers", "customer_key"),
        ReferenceCheck::new("fact_orders", "product_key", "dim_products", "product_key"),
        ReferenceCheck::new("fact_orders", "date_key", "dim_date", "date_key"),
    ]
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            null_rate_threshold: default_null_rate_threshold(),
            null_checks: default_null_checks(),
            duplicate_checks: default_duplicate_checks(),
            orphan_checks: default_orphan_checks(),
        }
    }
}

impl AuditConfig {
    /// Parse a config from YAML, applying defaults for absent fields
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
