use super::*;

#[test]
fn test_default_config_covers_star_schema() {
    let config = AuditConfig::default();
    assert_eq!(config.null_rate_threshold, 0.05);
    assert_eq!(config.null_checks.len(), 7);
    assert_eq!(config.duplicate_checks.len(), 3);
    assert_eq!(config.orphan_checks.len(), 3);
    assert!(config
        .null_checks
        .contains(&ColumnCheck::new("dim_customers", "email")));
    assert!(config.orphan_checks.contains(&ReferenceCheck::new(
        "fact_orders",
        "date_key",
        "dim_date",
        "date_key"
    )));
}

#[test]
fn test_empty_yaml_yields_defaults() {
    let config = AuditConfig::from_yaml("{}").unwrap();
    assert_eq!(config, AuditConfig::default());
}

#[test]
fn test_partial_override() {
    let yaml = r#"
null_rate_threshold: 0.10
duplicate_checks:
  - table: fact_shipments
    column: shipment_id
"#;
    let config = AuditConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.null_rate_threshold, 0.10);
    assert_eq!(
        config.duplicate_checks,
        vec![ColumnCheck::new("fact_shipments", "shipment_id")]
    );
    // untouched sections keep their defaults
    assert_eq!(config.orphan_checks, AuditConfig::default().orphan_checks);
}

#[test]
fn test_malformed_yaml_is_an_error() {
    assert!(AuditConfig::from_yaml("null_checks: 12").is_err());
}
