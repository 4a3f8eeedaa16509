//! Customers cleaning

use chrono::Utc;
use log::{info, warn};
use serde_json::Value;

use sl_core::batch::{is_null, str_cell, Batch};
use sl_core::policy::CleanPolicy;
use sl_core::schema::customers_schema;
use sl_core::timeparse::parse_timestamp;
use sl_core::CoreResult;

use super::{dedup_by_key, Cleaned};
use crate::stats::CleanStats;

/// Clean a raw customers batch
///
/// Deduplicates by `customer_id`, lower-cases and trims `email`, fills
/// null phones with the policy placeholder, coerces tiers outside the
/// policy vocabulary (including null tiers) to the fallback tier, and
/// derives `account_age_days` as whole days between now and
/// `signup_date` (null when the signup date does not parse).
pub fn clean_customers(raw: &Batch, policy: &CleanPolicy) -> CoreResult<Cleaned> {
    customers_schema().validate(raw)?;

    let (mut rows, duplicates_removed) = dedup_by_key(raw, "customer_id");
    if duplicates_removed > 0 {
        info!("Customers: removed {duplicates_removed} duplicate rows");
    }

    let mut stats = CleanStats {
        raw_rows: raw.len(),
        duplicates_removed,
        ..Default::default()
    };
    let mut filled_phones = 0usize;
    let mut coerced_tiers = 0usize;
    let now = Utc::now();

    for row in &mut rows {
        let email = str_cell(row, "email").map(|e| e.trim().to_lowercase());
        if let Some(email) = email {
            row.insert("email".to_string(), Value::from(email));
        }

        if is_null(row.get("phone")) {
            row.insert(
                "phone".to_string(),
                Value::from(policy.missing_phone.clone()),
            );
            filled_phones += 1;
        }

        // A null tier has no sensible normalization either, so it takes
        // the fallback along with out-of-vocabulary values.
        let tier = str_cell(row, "customer_tier").map(|t| t.trim().to_uppercase());
        let tier = match tier {
            Some(t) if policy.is_valid_tier(&t) => t,
            _ => {
                coerced_tiers += 1;
                policy.fallback_tier.clone()
            }
        };
        row.insert("customer_tier".to_string(), Value::from(tier));

        let signup_present = !is_null(row.get("signup_date"));
        match row.get("signup_date").and_then(parse_timestamp) {
            Some(ts) => {
                let age_days = (now - ts).num_days();
                row.insert("account_age_days".to_string(), Value::from(age_days));
            }
            None => {
                if signup_present {
                    stats.unparseable_timestamps += 1;
                }
                row.insert("account_age_days".to_string(), Value::Null);
            }
        }
    }

    if filled_phones > 0 {
        info!(
            "Customers: filled {filled_phones} null phone numbers with '{}'",
            policy.missing_phone
        );
    }
    if coerced_tiers > 0 {
        warn!(
            "Customers: {coerced_tiers} rows have invalid tiers, defaulting to {}",
            policy.fallback_tier
        );
    }

    stats.defaults_applied = filled_phones;
    stats.values_coerced = coerced_tiers;
    stats.output_rows = rows.len();
    info!(
        "Customers cleaned: {} records ({} raw)",
        rows.len(),
        raw.len()
    );

    Ok(Cleaned {
        batch: Batch::from_rows(rows),
        stats,
    })
}

#[cfg(test)]
#[path = "customers_test.rs"]
mod tests;
