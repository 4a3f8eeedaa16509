//! Batch schema descriptors
//!
//! The original pipeline assumed its column names implicitly and failed at
//! whatever point a missing column was first touched. Here the expected
//! shape of each raw batch is an explicit descriptor checked at the start
//! of every cleaner: a required column that is absent, or a non-null value
//! of the wrong type, is a structural error that fails the run. Null cells
//! are never a schema violation; repairing them is the cleaners' job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::batch::Batch;
use crate::error::{CoreError, CoreResult};

/// Cell type of a batch column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 text
    String,
    /// Whole number (whole-valued floats are accepted, see [`crate::batch::int_cell`])
    Integer,
    /// Any numeric value
    Float,
    /// true/false
    Boolean,
    /// Timestamp carried as text; parseability is a data concern, not a
    /// schema concern
    Timestamp,
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String | FieldType::Timestamp => value.is_string(),
            FieldType::Integer => match value.as_f64() {
                Some(f) => f.fract() == 0.0 && f.is_finite(),
                None => false,
            },
            FieldType::Float => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Timestamp => "timestamp",
        }
    }
}

/// One required column of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name
    pub name: String,

    /// Expected type of non-null cells
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldSpec {
    /// Create a field spec
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The expected shape of one entity's raw batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSchema {
    /// Entity name, used in error messages and logs
    pub entity: String,

    /// Required columns; extra columns in a batch are passed through
    pub fields: Vec<FieldSpec>,
}

impl BatchSchema {
    /// Create a schema from (name, type) pairs
    pub fn new(entity: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            entity: entity.into(),
            fields,
        }
    }

    /// Validate a batch against this schema
    ///
    /// Checks that every required column is present in every row and that
    /// every non-null cell has the declared type. Extra columns are
    /// ignored. An empty batch is trivially valid.
    pub fn validate(&self, batch: &Batch) -> CoreResult<()> {
        for (idx, row) in batch.rows().iter().enumerate() {
            for field in &self.fields {
                match row.get(&field.name) {
                    None => {
                        return Err(CoreError::MissingColumn {
                            entity: self.entity.clone(),
                            column: field.name.clone(),
                            row: idx,
                        });
                    }
                    Some(Value::Null) => {}
                    Some(value) => {
                        if !field.field_type.matches(value) {
                            return Err(CoreError::ColumnType {
                                entity: self.entity.clone(),
                                column: field.name.clone(),
                                row: idx,
                                expected: field.field_type.name().to_string(),
                                found: json_type_name(value).to_string(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Schema of the raw orders batch (relational orders source)
pub fn orders_schema() -> BatchSchema {
    use FieldType::*;
    BatchSchema::new(
        "orders",
        vec![
            FieldSpec::new("order_id", String),
            FieldSpec::new("customer_id", String),
            FieldSpec::new("product_id", String),
            FieldSpec::new("order_date", Timestamp),
            FieldSpec::new("quantity", Integer),
            FieldSpec::new("unit_price", Float),
            FieldSpec::new("total_amount", Float),
            FieldSpec::new("status", String),
            FieldSpec::new("payment_method", String),
            FieldSpec::new("shipping_address", String),
        ],
    )
}

/// Schema of the raw customers batch (relational customers source)
pub fn customers_schema() -> BatchSchema {
    use FieldType::*;
    BatchSchema::new(
        "customers",
        vec![
            FieldSpec::new("customer_id", String),
            FieldSpec::new("first_name", String),
            FieldSpec::new("last_name", String),
            FieldSpec::new("email", String),
            FieldSpec::new("phone", String),
            FieldSpec::new("city", String),
            FieldSpec::new("state", String),
            FieldSpec::new("country", String),
            FieldSpec::new("signup_date", Timestamp),
            FieldSpec::new("customer_tier", String),
            FieldSpec::new("lifetime_value", Float),
            FieldSpec::new("is_active", Boolean),
        ],
    )
}

/// Schema of the raw reviews batch (document reviews source)
pub fn reviews_schema() -> BatchSchema {
    use FieldType::*;
    BatchSchema::new(
        "reviews",
        vec![
            FieldSpec::new("review_id", String),
            FieldSpec::new("product_id", String),
            FieldSpec::new("customer_id", String),
            FieldSpec::new("rating", Integer),
            FieldSpec::new("review_text", String),
            FieldSpec::new("review_date", Timestamp),
            FieldSpec::new("verified_purchase", Boolean),
            FieldSpec::new("helpful_votes", Integer),
            FieldSpec::new("product_category", String),
        ],
    )
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
