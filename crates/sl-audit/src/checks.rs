//! Check SQL generation
//!
//! Pure builders for the auditor's COUNT queries. Table and column names
//! come from configuration, so every identifier is quoted.

use sl_core::sql_utils::{quote_ident, quote_qualified};

/// SQL counting all rows of a table
pub fn row_count_sql(table: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", quote_qualified(table))
}

/// SQL counting rows where a column is NULL
pub fn null_count_sql(table: &str, column: &str) -> String {
    format!(
        "SELECT COUNT(*) FROM {} WHERE {} IS NULL",
        quote_qualified(table),
        quote_ident(column)
    )
}

/// SQL counting business keys that occur more than once
pub fn duplicate_key_sql(table: &str, key_column: &str) -> String {
    let qt = quote_qualified(table);
    let qc = quote_ident(key_column);
    format!(
        "SELECT COUNT(*) FROM (\n\
         \x20 SELECT {qc}, COUNT(*) AS cnt\n\
         \x20 FROM {qt}\n\
         \x20 GROUP BY {qc}\n\
         \x20 HAVING COUNT(*) > 1\n\
         ) dupes"
    )
}

/// SQL counting fact rows whose non-null FK has no dimension match
///
/// A left anti-join: null foreign keys are not orphans here (the null
/// rate check owns those).
pub fn orphan_count_sql(
    fact_table: &str,
    fact_column: &str,
    dim_table: &str,
    dim_column: &str,
) -> String {
    let qf = quote_qualified(fact_table);
    let qfc = quote_ident(fact_column);
    let qd = quote_qualified(dim_table);
    let qdc = quote_ident(dim_column);
    format!(
        "SELECT COUNT(*)\n\
         FROM {qf} f\n\
         LEFT JOIN {qd} d ON f.{qfc} = d.{qdc}\n\
         WHERE f.{qfc} IS NOT NULL AND d.{qdc} IS NULL"
    )
}

#[cfg(test)]
#[path = "checks_test.rs"]
mod tests;
