//! SQL identifier quoting utilities
//!
//! The auditor builds its check SQL from configured table and column
//! names; quoting them here keeps a hostile config from injecting SQL.

/// Quote a SQL identifier
///
/// Wraps the identifier in double quotes and doubles any embedded double
/// quotes, per the SQL standard.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a potentially schema-qualified name (e.g. `analytics.fact_orders`)
///
/// Splits on `.` and quotes each component individually.
pub fn quote_qualified(name: &str) -> String {
    name.split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

/// Escape a value for use inside a single-quoted SQL string literal
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("fact_orders"), r#""fact_orders""#);
        assert_eq!(quote_ident(r#"bad"name"#), r#""bad""name""#);
    }

    #[test]
    fn test_quote_qualified() {
        assert_eq!(quote_qualified("dim_customers"), r#""dim_customers""#);
        assert_eq!(
            quote_qualified("analytics.fact_orders"),
            r#""analytics"."fact_orders""#
        );
    }

    #[test]
    fn test_escape_sql_string() {
        assert_eq!(escape_sql_string("O'Brien"), "O''Brien");
    }
}
