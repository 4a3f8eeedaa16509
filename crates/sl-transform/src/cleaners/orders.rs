//! Orders cleaning

use chrono::Datelike;
use log::info;
use serde_json::Value;

use sl_core::batch::{float_cell, int_cell, is_null, str_cell, Batch};
use sl_core::policy::CleanPolicy;
use sl_core::schema::orders_schema;
use sl_core::timeparse::parse_timestamp;
use sl_core::CoreResult;

use super::{dedup_by_key, Cleaned};
use crate::stats::CleanStats;

/// Clean a raw orders batch
///
/// Deduplicates by `order_id`, fills null quantities with the policy
/// default, recalculates `total_amount` where missing (never overwriting a
/// present value), upper-cases `status`, and derives `order_month`,
/// `order_year`, and `order_day_of_week` (Monday = 0) from `order_date`.
/// An unparseable order date nulls the derived columns.
pub fn clean_orders(raw: &Batch, policy: &CleanPolicy) -> CoreResult<Cleaned> {
    orders_schema().validate(raw)?;

    let (mut rows, duplicates_removed) = dedup_by_key(raw, "order_id");
    if duplicates_removed > 0 {
        info!("Orders: removed {duplicates_removed} duplicate rows");
    }

    let mut stats = CleanStats {
        raw_rows: raw.len(),
        duplicates_removed,
        ..Default::default()
    };
    let mut filled_quantities = 0usize;
    let mut recalculated_totals = 0usize;

    for row in &mut rows {
        // Null quantity defaults; quantity is re-stored as an integer
        // either way so whole-valued floats from the extractor normalize.
        let quantity = match int_cell(row, "quantity") {
            Some(q) => q,
            None => {
                filled_quantities += 1;
                policy.default_quantity
            }
        };
        row.insert("quantity".to_string(), Value::from(quantity));

        // Recalculate total_amount only where it is missing.
        if is_null(row.get("total_amount")) {
            if let Some(unit_price) = float_cell(row, "unit_price") {
                row.insert(
                    "total_amount".to_string(),
                    Value::from(quantity as f64 * unit_price),
                );
                recalculated_totals += 1;
            }
        }

        let status = str_cell(row, "status").map(|s| s.trim().to_uppercase());
        if let Some(status) = status {
            row.insert("status".to_string(), Value::from(status));
        }

        let date_present = !is_null(row.get("order_date"));
        match row.get("order_date").and_then(parse_timestamp) {
            Some(ts) => {
                row.insert("order_month".to_string(), Value::from(ts.month()));
                row.insert("order_year".to_string(), Value::from(ts.year()));
                row.insert(
                    "order_day_of_week".to_string(),
                    Value::from(ts.weekday().num_days_from_monday()),
                );
            }
            None => {
                if date_present {
                    stats.unparseable_timestamps += 1;
                }
                row.insert("order_month".to_string(), Value::Null);
                row.insert("order_year".to_string(), Value::Null);
                row.insert("order_day_of_week".to_string(), Value::Null);
            }
        }
    }

    if filled_quantities > 0 {
        info!(
            "Orders: filled {filled_quantities} null quantities with {}",
            policy.default_quantity
        );
    }
    if recalculated_totals > 0 {
        info!("Orders: recalculated {recalculated_totals} missing total_amounts");
    }

    stats.defaults_applied = filled_quantities + recalculated_totals;
    stats.output_rows = rows.len();
    info!("Orders cleaned: {} records ({} raw)", rows.len(), raw.len());

    Ok(Cleaned {
        batch: Batch::from_rows(rows),
        stats,
    })
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
