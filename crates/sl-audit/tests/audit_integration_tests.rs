//! Transform -> load -> audit, end to end against an in-memory warehouse

use serde_json::json;
use sl_audit::{AuditConfig, Auditor, ColumnCheck, ReferenceCheck};
use sl_core::batch::{float_cell, str_cell, Batch};
use sl_core::sql_utils::escape_sql_string;
use sl_core::{CleanPolicy, RunStatus};
use sl_db::{DuckDbWarehouse, Warehouse};
use sl_transform::run_pipeline;

fn raw_orders() -> Batch {
    Batch::from_json(json!([
        {"order_id": "o1", "customer_id": "CUST_00001", "product_id": "PROD_0001",
         "order_date": "2024-01-15", "quantity": 2, "unit_price": 25.0,
         "total_amount": 50.0, "status": "completed", "payment_method": "CREDIT_CARD",
         "shipping_address": "123 Main St"},
        {"order_id": "o2", "customer_id": "CUST_00002", "product_id": "PROD_0001",
         "order_date": "2024-02-20", "quantity": null, "unit_price": 50.0,
         "total_amount": null, "status": "PENDING", "payment_method": "PAYPAL",
         "shipping_address": null},
        {"order_id": "o3", "customer_id": "CUST_99999", "product_id": "PROD_0002",
         "order_date": "2024-03-10", "quantity": 1, "unit_price": 10.0,
         "total_amount": 10.0, "status": "REFUNDED", "payment_method": "DEBIT_CARD",
         "shipping_address": null}
    ]))
    .unwrap()
}

fn raw_customers() -> Batch {
    Batch::from_json(json!([
        {"customer_id": "CUST_00001", "first_name": "Alice", "last_name": "Smith",
         "email": "Alice@Email.COM", "phone": null, "city": "New York",
         "state": "NY", "country": "US", "signup_date": "2023-01-15",
         "customer_tier": "GOLD", "lifetime_value": 5000.0, "is_active": true},
        {"customer_id": "CUST_00002", "first_name": "Bob", "last_name": "Jones",
         "email": "bob@email.com", "phone": "555-0002", "city": "Chicago",
         "state": "IL", "country": "US", "signup_date": "2023-06-20",
         "customer_tier": "SILVER", "lifetime_value": 200.0, "is_active": true}
    ]))
    .unwrap()
}

/// Minimal loader stand-in: upsert-free INSERTs of the columns the audit
/// checks probe.
async fn load(warehouse: &dyn Warehouse, orders: &Batch, customers: &Batch) {
    warehouse
        .execute_batch(
            "CREATE TABLE dim_customers (customer_id VARCHAR, email VARCHAR);
             CREATE TABLE fact_orders (order_id VARCHAR, customer_id VARCHAR, total_amount DOUBLE);",
        )
        .await
        .unwrap();

    for row in customers.rows() {
        let sql = format!(
            "INSERT INTO dim_customers VALUES ('{}', '{}');",
            escape_sql_string(str_cell(row, "customer_id").unwrap()),
            escape_sql_string(str_cell(row, "email").unwrap()),
        );
        warehouse.execute_batch(&sql).await.unwrap();
    }
    for row in orders.rows() {
        let sql = format!(
            "INSERT INTO fact_orders VALUES ('{}', '{}', {});",
            escape_sql_string(str_cell(row, "order_id").unwrap()),
            escape_sql_string(str_cell(row, "customer_id").unwrap()),
            float_cell(row, "total_amount").unwrap(),
        );
        warehouse.execute_batch(&sql).await.unwrap();
    }
}

fn audit_config() -> AuditConfig {
    AuditConfig {
        null_rate_threshold: 0.05,
        null_checks: vec![
            ColumnCheck::new("fact_orders", "order_id"),
            ColumnCheck::new("fact_orders", "total_amount"),
            ColumnCheck::new("dim_customers", "email"),
        ],
        duplicate_checks: vec![
            ColumnCheck::new("fact_orders", "order_id"),
            ColumnCheck::new("dim_customers", "customer_id"),
        ],
        orphan_checks: vec![ReferenceCheck::new(
            "fact_orders",
            "customer_id",
            "dim_customers",
            "customer_id",
        )],
    }
}

#[tokio::test]
async fn test_transformed_warehouse_audits_clean() {
    let outcome = run_pipeline(
        &raw_orders(),
        &raw_customers(),
        &Batch::new(),
        &CleanPolicy::default(),
    )
    .unwrap();
    assert_eq!(outcome.rejected_orders, 1); // CUST_99999

    let warehouse = DuckDbWarehouse::in_memory().unwrap();
    load(&warehouse, &outcome.orders, &outcome.customers).await;

    let report = Auditor::new(&warehouse, audit_config()).run().await.unwrap();
    assert_eq!(report.status, RunStatus::Success);
    assert!(report.issues.is_empty(), "{:?}", report.issues);
}

#[tokio::test]
async fn test_unvalidated_load_is_flagged() {
    // Load the orders without referential validation; the auditor finds
    // the orphan the pipeline would have dropped.
    let policy = CleanPolicy::default();
    let orders = sl_transform::clean_orders(&raw_orders(), &policy).unwrap();
    let customers = sl_transform::clean_customers(&raw_customers(), &policy).unwrap();

    let warehouse = DuckDbWarehouse::in_memory().unwrap();
    load(&warehouse, &orders.batch, &customers.batch).await;

    let report = Auditor::new(&warehouse, audit_config()).run().await.unwrap();
    assert_eq!(report.status, RunStatus::Warning);
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].contains("orphaned customer_id"));
}
