//! Concentration risk per SIMM risk class.
//!
//! Each risk class supplies its own bucket grouping and threshold tables
//! through the [`ConcentrationRisk`] trait. The filtering, netting and the
//! `max(1, sqrt(sum / threshold))` formula are provided by the trait and are
//! the same for every risk class.
//!
//! - [`CreditQualifyingConcentration`]: SIMM 2.0 credit-qualifying tables
//! - [`ConcentrationRegistry`]: process-wide variant lookup by risk class
//! - [`QualifierSums`]: per-qualifier net amounts computed in one pass
//!
//! # Example
//!
//! ```rust
//! use simm_margin::concentration::{ConcentrationRegistry, ConcentrationRisk};
//! use simm_core::{RiskClass, Sensitivity};
//! use rust_decimal_macros::dec;
//!
//! let all = vec![
//!     Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("1"), dec!(1_200_000)),
//!     Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("1"), dec!(700_000)),
//! ];
//!
//! let cq = ConcentrationRegistry::global().resolver(RiskClass::CreditQualifying)?;
//! let cr = cq.delta_concentration("Issuer-A", Some("1"), &all)?;
//! assert_eq!(cr.round_dp(8), dec!(1.41421356));
//! # Ok::<(), simm_margin::MarginError>(())
//! ```

mod buckets;
mod credit_qualifying;
mod formula;
mod registry;
mod thresholds;

pub use buckets::{BucketGroups, BucketMatch};
pub use credit_qualifying::{CreditQualifyingConcentration, CreditQualifyingGroup};
pub use formula::{concentration_factor, CONCENTRATION_SCALE};
pub use registry::{delta_concentration_risk, vega_concentration_risk, ConcentrationRegistry};
pub use thresholds::ThresholdTable;

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use simm_core::{RiskClass, RiskMeasure, Sensitivity, WeightedSensitivity};

use crate::error::{MarginError, MarginResult};

/// Concentration risk contract implemented once per risk class.
///
/// Implementors provide table lookups only. The provided methods compute the
/// concentration factor and must not be overridden with a different formula.
pub trait ConcentrationRisk: Send + Sync + fmt::Debug {
    /// Risk class whose tables this variant carries.
    fn risk_class(&self) -> RiskClass;

    /// Delta threshold for the bucket a sensitivity falls in.
    ///
    /// `qualifier` is used for diagnostics only.
    ///
    /// # Errors
    ///
    /// Fails when the bucket is missing or belongs to no bucket group.
    fn delta_threshold(&self, qualifier: &str, bucket: Option<&str>) -> MarginResult<Decimal>;

    /// Vega threshold, shared by every bucket of the risk class.
    fn vega_threshold(&self) -> Decimal;

    /// Concentration factor for a qualifier whose net delta is already known.
    fn delta_concentration_for_sum(
        &self,
        qualifier: &str,
        bucket: Option<&str>,
        net_sum: Decimal,
    ) -> MarginResult<Decimal> {
        let threshold = self.delta_threshold(qualifier, bucket)?;
        concentration_factor(self.risk_class(), RiskMeasure::Delta, net_sum, threshold)
    }

    /// Delta concentration factor for `qualifier`, netting `amount_usd` over
    /// every sensitivity in `all` with that exact qualifier.
    fn delta_concentration(
        &self,
        qualifier: &str,
        bucket: Option<&str>,
        all: &[Sensitivity],
    ) -> MarginResult<Decimal> {
        let sum = net_sum(
            all.iter()
                .filter(|s| s.qualifier() == qualifier)
                .map(Sensitivity::amount_usd),
        )?;
        self.delta_concentration_for_sum(qualifier, bucket, sum)
    }

    /// Vega concentration factor for `qualifier`, netting weighted values
    /// over every weighted sensitivity in `all` with that exact qualifier.
    fn vega_concentration(
        &self,
        qualifier: &str,
        all: &[WeightedSensitivity<'_>],
    ) -> MarginResult<Decimal> {
        let sum = net_sum(
            all.iter()
                .filter(|ws| ws.sensitivity().qualifier() == qualifier)
                .map(|ws| ws.weighted_value()),
        )?;
        concentration_factor(self.risk_class(), RiskMeasure::Vega, sum, self.vega_threshold())
    }
}

/// Signed sum with overflow detection.
fn net_sum(mut amounts: impl Iterator<Item = Decimal>) -> MarginResult<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or_else(|| MarginError::overflow("qualifier net sum"))
    })
}

/// Net amounts per qualifier, computed in a single pass over a batch.
///
/// Lets a batch reuse one sum per qualifier instead of re-filtering the whole
/// batch for every sensitivity.
#[derive(Debug, Clone, Default)]
pub struct QualifierSums<'a> {
    sums: HashMap<&'a str, Decimal>,
}

impl<'a> QualifierSums<'a> {
    /// Nets `amount_usd` per qualifier.
    pub fn from_sensitivities(all: &'a [Sensitivity]) -> MarginResult<Self> {
        Self::accumulate(all.iter().map(|s| (s.qualifier(), s.amount_usd())))
    }

    fn accumulate(items: impl Iterator<Item = (&'a str, Decimal)>) -> MarginResult<Self> {
        let mut sums: HashMap<&'a str, Decimal> = HashMap::new();
        for (qualifier, amount) in items {
            let entry = sums.entry(qualifier).or_insert(Decimal::ZERO);
            *entry = entry
                .checked_add(amount)
                .ok_or_else(|| MarginError::overflow("qualifier net sum"))?;
        }
        Ok(Self { sums })
    }

    /// Net amount for a qualifier; zero if it never occurred.
    #[must_use]
    pub fn get(&self, qualifier: &str) -> Decimal {
        self.sums.get(qualifier).copied().unwrap_or(Decimal::ZERO)
    }

    /// Number of distinct qualifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// Returns true if no qualifier was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Iterates over `(qualifier, net amount)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Decimal)> + '_ {
        self.sums.iter().map(|(q, s)| (*q, *s))
    }
}
