//! Reviews cleaning

use log::{info, warn};
use serde_json::Value;

use sl_core::batch::{int_cell, is_null, Batch};
use sl_core::policy::CleanPolicy;
use sl_core::schema::reviews_schema;
use sl_core::timeparse::parse_timestamp;
use sl_core::CoreResult;

use super::{dedup_by_key, Cleaned};
use crate::stats::CleanStats;

/// Sentiment bucket for a rating on the 1-5 scale
///
/// 1-2 negative, 3 neutral, 4-5 positive. Ratings are clipped into the
/// policy range before bucketing, so out-of-range inputs land in the
/// nearest bucket rather than being dropped.
fn sentiment_category(rating: i64) -> &'static str {
    if rating <= 2 {
        "negative"
    } else if rating == 3 {
        "neutral"
    } else {
        "positive"
    }
}

/// Clean a raw reviews batch
///
/// Deduplicates by `review_id`, clips ratings into the policy range,
/// fills null review text with an empty string, and derives
/// `sentiment_category`. A null rating stays null and gets a null
/// sentiment.
pub fn clean_reviews(raw: &Batch, policy: &CleanPolicy) -> CoreResult<Cleaned> {
    reviews_schema().validate(raw)?;

    let (mut rows, duplicates_removed) = dedup_by_key(raw, "review_id");
    if duplicates_removed > 0 {
        info!("Reviews: removed {duplicates_removed} duplicate rows");
    }

    let mut stats = CleanStats {
        raw_rows: raw.len(),
        duplicates_removed,
        ..Default::default()
    };
    let mut clipped_ratings = 0usize;
    let mut filled_text = 0usize;

    for row in &mut rows {
        match int_cell(row, "rating") {
            Some(rating) => {
                let clipped = rating.clamp(policy.rating_min, policy.rating_max);
                if clipped != rating {
                    clipped_ratings += 1;
                }
                row.insert("rating".to_string(), Value::from(clipped));
                row.insert(
                    "sentiment_category".to_string(),
                    Value::from(sentiment_category(clipped)),
                );
            }
            None => {
                row.insert("sentiment_category".to_string(), Value::Null);
            }
        }

        if is_null(row.get("review_text")) {
            row.insert("review_text".to_string(), Value::from(""));
            filled_text += 1;
        }

        if !is_null(row.get("review_date")) && row.get("review_date").and_then(parse_timestamp).is_none() {
            stats.unparseable_timestamps += 1;
        }
    }

    if clipped_ratings > 0 {
        warn!(
            "Reviews: clipping {clipped_ratings} ratings to [{}, {}]",
            policy.rating_min, policy.rating_max
        );
    }
    if filled_text > 0 {
        info!("Reviews: filled {filled_text} null review texts with empty string");
    }

    stats.values_coerced = clipped_ratings;
    stats.defaults_applied = filled_text;
    stats.output_rows = rows.len();
    info!("Reviews cleaned: {} records ({} raw)", rows.len(), raw.len());

    Ok(Cleaned {
        batch: Batch::from_rows(rows),
        stats,
    })
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod tests;
