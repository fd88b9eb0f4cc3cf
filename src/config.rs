//! Business limits applied while validating transaction legs.
//!
//! Limits can be loaded from a JSON document; every key is optional:
//! ```json
//! { "payInLimit": 4000, "lowFundsThreshold": 500, "approachingLimitThreshold": 500 }
//! ```

use crate::error::{AccountError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds consulted by [`Account::validate`](crate::domain::account::Account::validate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Limits {
    /// Maximum cumulative amount an account may receive.
    pub pay_in_limit: Decimal,
    /// A withdrawal leaving less than this balance raises a low-funds alert.
    pub low_funds_threshold: Decimal,
    /// Remaining pay-in headroom below which an approaching-limit alert is raised.
    pub approaching_limit_threshold: Decimal,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            pay_in_limit: dec!(4000),
            low_funds_threshold: dec!(500),
            approaching_limit_threshold: dec!(500),
        }
    }
}

impl Limits {
    /// Reads limits from a JSON file and validates them.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let limits: Self = serde_json::from_str(&content)
            .map_err(|e| AccountError::InvalidConfig(format!("Malformed limits file: {}", e)))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Returns a copy with the pay-in limit replaced.
    pub fn with_pay_in_limit(self, pay_in_limit: Decimal) -> Self {
        Self {
            pay_in_limit,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pay_in_limit < Decimal::ZERO
            || self.low_funds_threshold < Decimal::ZERO
            || self.approaching_limit_threshold < Decimal::ZERO
        {
            return Err(AccountError::InvalidConfig(
                "Limits must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
