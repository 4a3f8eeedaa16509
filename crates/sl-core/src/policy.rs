//! Cleaning policy configuration
//!
//! The repair fallbacks the cleaners apply (default quantity, missing
//! phone placeholder, tier vocabulary, rating bounds) are policy, not
//! logic, so they live in a config struct that deployments can override
//! from YAML instead of being hard-coded in the cleaners.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Fallback and coercion settings shared by the entity cleaners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanPolicy {
    /// Value substituted for a null order quantity
    #[serde(default = "default_quantity")]
    pub default_quantity: i64,

    /// Placeholder substituted for a null customer phone
    #[serde(default = "default_missing_phone")]
    pub missing_phone: String,

    /// Closed vocabulary of customer tiers (upper-case)
    #[serde(default = "default_valid_tiers")]
    pub valid_tiers: Vec<String>,

    /// Tier substituted for values outside the vocabulary
    #[serde(default = "default_fallback_tier")]
    pub fallback_tier: String,

    /// Lower bound of the review rating scale (inclusive)
    #[serde(default = "default_rating_min")]
    pub rating_min: i64,

    /// Upper bound of the review rating scale (inclusive)
    #[serde(default = "default_rating_max")]
    pub rating_max: i64,
}

fn default_quantity() -> i64 {
    1
}

fn default_missing_phone() -> String {
    "N/A".to_string()
}

fn default_valid_tiers() -> Vec<String> {
    ["BRONZE", "SILVER", "GOLD", "PLATINUM"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_fallback_tier() -> String {
    "BRONZE".to_string()
}

fn default_rating_min() -> i64 {
    1
}

fn default_rating_max() -> i64 {
    5
}

impl Default for CleanPolicy {
    fn default() -> Self {
        Self {
            default_quantity: default_quantity(),
            missing_phone: default_missing_phone(),
            valid_tiers: default_valid_tiers(),
            fallback_tier: default_fallback_tier(),
            rating_min: default_rating_min(),
            rating_max: default_rating_max(),
        }
    }
}

impl CleanPolicy {
    /// Parse a policy from YAML, applying defaults for absent fields
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        let policy: Self = serde_yaml::from_str(yaml)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check internal consistency of the policy
    pub fn validate(&self) -> CoreResult<()> {
        if self.rating_min > self.rating_max {
            return Err(CoreError::PolicyInvalid {
                message: format!(
                    "rating_min ({}) exceeds rating_max ({})",
                    self.rating_min, self.rating_max
                ),
            });
        }
        if !self.valid_tiers.iter().any(|t| t == &self.fallback_tier) {
            return Err(CoreError::PolicyInvalid {
                message: format!(
                    "fallback_tier '{}' is not in valid_tiers",
                    self.fallback_tier
                ),
            });
        }
        Ok(())
    }

    /// Whether a (already upper-cased) tier is in the vocabulary
    pub fn is_valid_tier(&self, tier: &str) -> bool {
        self.valid_tiers.iter().any(|t| t == tier)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;
