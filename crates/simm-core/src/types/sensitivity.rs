//! Sensitivity records flowing through the weighting engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskClass;

/// A single market-risk sensitivity expressed in USD.
///
/// Sensitivities are immutable once constructed. The qualifier groups
/// sensitivities that are netted together for concentration purposes
/// (for credit, issuer plus seniority).
///
/// # Examples
///
/// ```
/// use simm_core::types::{RiskClass, Sensitivity};
/// use rust_decimal_macros::dec;
///
/// let s = Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("7"), dec!(1000));
/// assert_eq!(s.bucket(), Some("7"));
/// assert_eq!(s.amount_usd(), dec!(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensitivity {
    risk_class: RiskClass,
    qualifier: String,
    bucket: Option<String>,
    amount_usd: Decimal,
}

impl Sensitivity {
    /// Creates a new sensitivity.
    #[must_use]
    pub fn new(
        risk_class: RiskClass,
        qualifier: impl Into<String>,
        bucket: Option<&str>,
        amount_usd: Decimal,
    ) -> Self {
        Self {
            risk_class,
            qualifier: qualifier.into(),
            bucket: bucket.map(str::to_string),
            amount_usd,
        }
    }

    /// Returns the risk class.
    #[must_use]
    pub fn risk_class(&self) -> RiskClass {
        self.risk_class
    }

    /// Returns the qualifier.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Returns the bucket, if the risk class uses buckets.
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Returns the amount in USD.
    #[must_use]
    pub fn amount_usd(&self) -> Decimal {
        self.amount_usd
    }
}

/// A sensitivity scaled by its risk weight and concentration factor.
///
/// Borrows the source sensitivity, so it cannot outlive the input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedSensitivity<'a> {
    sensitivity: &'a Sensitivity,
    weighted_value: Decimal,
}

impl<'a> WeightedSensitivity<'a> {
    /// Creates a weighted sensitivity.
    #[must_use]
    pub fn new(sensitivity: &'a Sensitivity, weighted_value: Decimal) -> Self {
        Self {
            sensitivity,
            weighted_value,
        }
    }

    /// Returns the source sensitivity.
    #[must_use]
    pub fn sensitivity(&self) -> &'a Sensitivity {
        self.sensitivity
    }

    /// Returns the weighted value.
    #[must_use]
    pub fn weighted_value(&self) -> Decimal {
        self.weighted_value
    }
}
