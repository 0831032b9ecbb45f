//! Lookup traits consumed by the weighting engine.
//!
//! - [`RiskWeightSource`]: supplies the SIMM risk weight for a sensitivity
//! - [`RiskWeightTable`]: in-memory implementation keyed by risk class and bucket
//!
//! The risk-weight tables themselves are owned by the surrounding system; the
//! engine only depends on the trait.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{LookupError, LookupResult};
use crate::types::{RiskClass, Sensitivity};

/// Source of SIMM risk weights.
///
/// Implementations are expected to be total over valid
/// `(risk_class, sensitivity)` pairs. A failure is treated by callers as a
/// fatal upstream error.
pub trait RiskWeightSource: Send + Sync {
    /// Returns the risk weight for the sensitivity.
    fn risk_weight(&self, risk_class: RiskClass, sensitivity: &Sensitivity)
        -> LookupResult<Decimal>;
}

impl<T: RiskWeightSource + ?Sized> RiskWeightSource for &T {
    fn risk_weight(
        &self,
        risk_class: RiskClass,
        sensitivity: &Sensitivity,
    ) -> LookupResult<Decimal> {
        (**self).risk_weight(risk_class, sensitivity)
    }
}

/// In-memory risk-weight table.
///
/// Weights are keyed by risk class and bucket. A per-risk-class weight can be
/// registered for sensitivities whose bucket has no entry (or that carry no
/// bucket at all, as for FX).
///
/// # Examples
///
/// ```
/// use simm_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let table = RiskWeightTable::builder()
///     .bucket_weight(RiskClass::CreditQualifying, "1", dec!(85))
///     .class_weight(RiskClass::Fx, dec!(8.2))
///     .build();
///
/// let s = Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("1"), dec!(10));
/// assert_eq!(table.risk_weight(RiskClass::CreditQualifying, &s).unwrap(), dec!(85));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RiskWeightTable {
    by_bucket: HashMap<(RiskClass, String), Decimal>,
    by_class: HashMap<RiskClass, Decimal>,
}

impl RiskWeightTable {
    /// Returns a builder for a new table.
    #[must_use]
    pub fn builder() -> RiskWeightTableBuilder {
        RiskWeightTableBuilder::default()
    }

    /// Returns the number of registered weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_bucket.len() + self.by_class.len()
    }

    /// Returns true if no weights are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RiskWeightSource for RiskWeightTable {
    fn risk_weight(
        &self,
        risk_class: RiskClass,
        sensitivity: &Sensitivity,
    ) -> LookupResult<Decimal> {
        sensitivity
            .bucket()
            .and_then(|bucket| self.by_bucket.get(&(risk_class, bucket.to_string())))
            .or_else(|| self.by_class.get(&risk_class))
            .copied()
            .ok_or_else(|| {
                LookupError::not_found(risk_class, sensitivity.qualifier(), sensitivity.bucket())
            })
    }
}

/// Builder for [`RiskWeightTable`].
#[derive(Debug, Clone, Default)]
pub struct RiskWeightTableBuilder {
    table: RiskWeightTable,
}

impl RiskWeightTableBuilder {
    /// Registers a weight for one bucket of a risk class.
    #[must_use]
    pub fn bucket_weight(mut self, risk_class: RiskClass, bucket: &str, weight: Decimal) -> Self {
        self.table
            .by_bucket
            .insert((risk_class, bucket.to_string()), weight);
        self
    }

    /// Registers the same weight for several buckets of a risk class.
    #[must_use]
    pub fn bucket_weights(mut self, risk_class: RiskClass, buckets: &[&str], weight: Decimal) -> Self {
        for bucket in buckets {
            self = self.bucket_weight(risk_class, bucket, weight);
        }
        self
    }

    /// Registers the fallback weight for a risk class.
    #[must_use]
    pub fn class_weight(mut self, risk_class: RiskClass, weight: Decimal) -> Self {
        self.table.by_class.insert(risk_class, weight);
        self
    }

    /// Builds the table.
    #[must_use]
    pub fn build(self) -> RiskWeightTable {
        self.table
    }
}
