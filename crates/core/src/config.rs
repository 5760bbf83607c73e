//! Process configuration for the issuing core.
//!
//! Deserialized once by the caller and passed in as immutable state; no
//! module reaches for constants of its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fiscal stamp policy: a flat fee applied to invoices and quotes once the
/// grand total reaches `threshold`. The fee itself is never taxed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampPolicy {
    /// Grand total (tax inclusive) at or above which the stamp applies.
    pub threshold: Decimal,
    /// Flat fee added on top of the grand total.
    pub fee: Decimal,
}

impl Default for StampPolicy {
    fn default() -> Self {
        Self {
            threshold: Decimal::new(10_00, 2),
            fee: Decimal::new(1_00, 2),
        }
    }
}

/// Billing configuration shared by every render/compute call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// ISO 4217 code suffixed to every formatted amount.
    pub currency_code: String,
    pub stamp: StampPolicy,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency_code: "DZD".to_string(),
            stamp: StampPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stamp_policy_matches_documented_constants() {
        let policy = StampPolicy::default();
        assert_eq!(policy.threshold, Decimal::new(1000, 2));
        assert_eq!(policy.fee, Decimal::new(100, 2));
    }

    #[test]
    fn config_deserializes_with_partial_overrides() {
        let cfg: BillingConfig =
            serde_json::from_str(r#"{ "currency_code": "EUR" }"#).unwrap();
        assert_eq!(cfg.currency_code, "EUR");
        assert_eq!(cfg.stamp, StampPolicy::default());
    }
}
