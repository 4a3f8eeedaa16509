use super::*;
use sl_core::batch::{float_cell, int_cell, str_cell};
use serde_json::json;

fn sample_orders() -> Batch {
    // o2 is duplicated; the o2 rows carry null quantity and total.
    Batch::from_json(json!([
        {"order_id": "o1", "customer_id": "CUST_00001", "product_id": "PROD_0001",
         "order_date": "2024-01-15", "quantity": 2, "unit_price": 25.0,
         "total_amount": 50.0, "status": "completed", "payment_method": "CREDIT_CARD",
         "shipping_address": "123 Main St"},
        {"order_id": "o2", "customer_id": "CUST_00002", "product_id": "PROD_0002",
         "order_date": "2024-02-20", "quantity": null, "unit_price": 50.0,
         "total_amount": null, "status": "PENDING", "payment_method": "PAYPAL",
         "shipping_address": "456 Oak Ave"},
        {"order_id": "o2", "customer_id": "CUST_00002", "product_id": "PROD_0002",
         "order_date": "2024-02-20", "quantity": null, "unit_price": 50.0,
         "total_amount": null, "status": "PENDING", "payment_method": "PAYPAL",
         "shipping_address": "456 Oak Ave"},
        {"order_id": "o3", "customer_id": "CUST_00003", "product_id": "PROD_0003",
         "order_date": "2024-03-10", "quantity": 5, "unit_price": 10.0,
         "total_amount": 50.0, "status": "Cancelled", "payment_method": "DEBIT_CARD",
         "shipping_address": "789 Pine Rd"},
        {"order_id": "o4", "customer_id": "CUST_99999", "product_id": "PROD_0004",
         "order_date": "2024-04-05", "quantity": 1, "unit_price": 100.0,
         "total_amount": 100.0, "status": "REFUNDED", "payment_method": "BANK_TRANSFER",
         "shipping_address": null}
    ]))
    .unwrap()
}

#[test]
fn test_removes_duplicates() {
    let cleaned = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    assert_eq!(cleaned.batch.len(), 4);
    assert_eq!(cleaned.stats.duplicates_removed, 1);
    let ids: Vec<_> = cleaned
        .batch
        .rows()
        .iter()
        .map(|r| str_cell(r, "order_id").unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["o1", "o2", "o3", "o4"]);
}

#[test]
fn test_handles_null_quantities() {
    let cleaned = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    let o2 = &cleaned.batch.rows()[1];
    assert_eq!(int_cell(o2, "quantity"), Some(1));
    for row in cleaned.batch.rows() {
        assert!(int_cell(row, "quantity").is_some());
    }
}

#[test]
fn test_recalculates_missing_total() {
    let cleaned = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    // quantity defaulted to 1, so total = 1 x 50.00
    let o2 = &cleaned.batch.rows()[1];
    assert_eq!(float_cell(o2, "total_amount"), Some(50.0));
    for row in cleaned.batch.rows() {
        assert!(float_cell(row, "total_amount").is_some());
    }
}

#[test]
fn test_never_overwrites_present_total() {
    let cleaned = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    // o3 has quantity 5 x 10.00 but a recorded total of 50.00 already;
    // a present value must survive untouched.
    let o3 = &cleaned.batch.rows()[2];
    assert_eq!(float_cell(o3, "total_amount"), Some(50.0));
    assert_eq!(cleaned.stats.defaults_applied, 2); // one quantity + one total
}

#[test]
fn test_standardizes_status_uppercase() {
    let cleaned = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    for row in cleaned.batch.rows() {
        let status = str_cell(row, "status").unwrap();
        assert_eq!(status, status.to_uppercase());
    }
    assert_eq!(str_cell(&cleaned.batch.rows()[2], "status"), Some("CANCELLED"));
}

#[test]
fn test_adds_time_columns() {
    let cleaned = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    let o1 = &cleaned.batch.rows()[0];
    assert_eq!(int_cell(o1, "order_month"), Some(1));
    assert_eq!(int_cell(o1, "order_year"), Some(2024));
    // 2024-01-15 is a Monday
    assert_eq!(int_cell(o1, "order_day_of_week"), Some(0));
}

#[test]
fn test_unparseable_date_nulls_derived_columns() {
    let mut raw = sample_orders().into_rows();
    raw[0].insert("order_date".to_string(), json!("sometime last spring"));
    let cleaned = clean_orders(&Batch::from_rows(raw), &CleanPolicy::default()).unwrap();
    let o1 = &cleaned.batch.rows()[0];
    assert!(o1["order_month"].is_null());
    assert!(o1["order_year"].is_null());
    assert!(o1["order_day_of_week"].is_null());
    assert_eq!(cleaned.stats.unparseable_timestamps, 1);
}

#[test]
fn test_extra_columns_pass_through() {
    let mut raw = sample_orders().into_rows();
    raw[0].insert("promo_code".to_string(), json!("SPRING24"));
    let cleaned = clean_orders(&Batch::from_rows(raw), &CleanPolicy::default()).unwrap();
    assert_eq!(str_cell(&cleaned.batch.rows()[0], "promo_code"), Some("SPRING24"));
}

#[test]
fn test_missing_column_fails_structurally() {
    let mut raw = sample_orders().into_rows();
    raw[2].remove("status");
    let err = clean_orders(&Batch::from_rows(raw), &CleanPolicy::default()).unwrap_err();
    assert!(err.to_string().contains("[E001]"));
}

#[test]
fn test_input_batch_is_not_mutated() {
    let raw = sample_orders();
    let before = raw.clone();
    clean_orders(&raw, &CleanPolicy::default()).unwrap();
    assert_eq!(raw, before);
}

#[test]
fn test_cleaning_is_idempotent() {
    let once = clean_orders(&sample_orders(), &CleanPolicy::default()).unwrap();
    let twice = clean_orders(&once.batch, &CleanPolicy::default()).unwrap();
    assert_eq!(once.batch, twice.batch);
    assert_eq!(twice.stats.duplicates_removed, 0);
    assert_eq!(twice.stats.defaults_applied, 0);
}
