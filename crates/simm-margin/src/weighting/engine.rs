//! Batch weighting engine.

use rust_decimal::Decimal;
use simm_core::{RiskClass, RiskWeightSource, Sensitivity, WeightedSensitivity};
use tracing::{debug, trace, warn};

use crate::concentration::{ConcentrationRegistry, QualifierSums};
use crate::config::WeightingConfig;
use crate::error::{MarginError, MarginResult};
use crate::parallel::maybe_parallel_try_map;

/// Weights sensitivities by risk weight and concentration factor.
///
/// The engine holds shared references to immutable tables plus its execution
/// config, so it is cheap to construct and safe to share across threads.
///
/// # Example
///
/// ```rust
/// use simm_core::prelude::*;
/// use simm_margin::WeightingEngine;
/// use rust_decimal_macros::dec;
///
/// let weights = RiskWeightTable::builder()
///     .bucket_weights(RiskClass::CreditQualifying, &["1", "7"], dec!(85))
///     .build();
/// let engine = WeightingEngine::new(&weights);
///
/// let batch = vec![
///     Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("1"), dec!(100_000)),
/// ];
/// let weighted = engine.weight_sensitivities(RiskClass::CreditQualifying, &batch)?;
/// assert_eq!(weighted[0].weighted_value(), dec!(8_500_000));
/// # Ok::<(), simm_margin::MarginError>(())
/// ```
#[derive(Clone)]
pub struct WeightingEngine<'w> {
    weights: &'w dyn RiskWeightSource,
    registry: &'w ConcentrationRegistry,
    config: WeightingConfig,
}

impl<'w> WeightingEngine<'w> {
    /// Creates an engine using the global concentration registry and default config.
    #[must_use]
    pub fn new(weights: &'w dyn RiskWeightSource) -> Self {
        Self {
            weights,
            registry: ConcentrationRegistry::global(),
            config: WeightingConfig::default(),
        }
    }

    /// Uses the given execution config.
    #[must_use]
    pub fn with_config(mut self, config: WeightingConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses a custom concentration registry.
    #[must_use]
    pub fn with_registry(mut self, registry: &'w ConcentrationRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the execution config.
    #[must_use]
    pub fn config(&self) -> &WeightingConfig {
        &self.config
    }

    /// Weights every sensitivity of a risk class.
    ///
    /// Concentration is measured against the entire batch, so `sensitivities`
    /// must hold the full set for the risk class. Output has the same length
    /// and order as the input.
    ///
    /// # Errors
    ///
    /// The batch fails as a whole on the first error:
    /// - [`MarginError::UnsupportedRiskClass`] if no concentration tables exist
    /// - [`MarginError::RiskClassMismatch`] if a sensitivity has another risk class
    /// - [`MarginError::UnclassifiableBucket`] / [`MarginError::MissingBucket`]
    /// - [`MarginError::RiskWeight`] when the risk-weight source fails
    /// - [`MarginError::Overflow`] on decimal overflow
    pub fn weight_sensitivities<'a>(
        &self,
        risk_class: RiskClass,
        sensitivities: &'a [Sensitivity],
    ) -> MarginResult<Vec<WeightedSensitivity<'a>>> {
        let resolver = self.registry.resolver(risk_class)?;

        if let Some(other) = sensitivities.iter().find(|s| s.risk_class() != risk_class) {
            return Err(MarginError::RiskClassMismatch {
                expected: risk_class,
                found: other.risk_class(),
                qualifier: other.qualifier().to_string(),
            });
        }

        let sums = QualifierSums::from_sensitivities(sensitivities)?;
        debug!(
            risk_class = %risk_class,
            sensitivities = sensitivities.len(),
            qualifiers = sums.len(),
            "weighting sensitivities"
        );
        for (qualifier, net) in sums.iter() {
            trace!(risk_class = %risk_class, qualifier, net = %net, "qualifier net sum");
        }

        let weighted = maybe_parallel_try_map(sensitivities, &self.config, |s| {
            let factor = resolver.delta_concentration_for_sum(
                s.qualifier(),
                s.bucket(),
                sums.get(s.qualifier()),
            )?;
            self.weight_sensitivity(risk_class, s, factor)
        })?;

        debug!(risk_class = %risk_class, weighted = weighted.len(), "weighting complete");
        Ok(weighted)
    }

    /// Weights one sensitivity with an externally supplied concentration factor.
    ///
    /// # Errors
    ///
    /// Fails if the risk-weight lookup fails or the product overflows.
    pub fn weight_sensitivity<'a>(
        &self,
        risk_class: RiskClass,
        sensitivity: &'a Sensitivity,
        concentration_factor: Decimal,
    ) -> MarginResult<WeightedSensitivity<'a>> {
        let risk_weight = self.risk_weight(risk_class, sensitivity)?;
        let weighted_value = weighted_value(risk_weight, sensitivity.amount_usd(), concentration_factor)?;
        Ok(WeightedSensitivity::new(sensitivity, weighted_value))
    }

    fn risk_weight(&self, risk_class: RiskClass, sensitivity: &Sensitivity) -> MarginResult<Decimal> {
        self.weights
            .risk_weight(risk_class, sensitivity)
            .map_err(|e| {
                warn!(
                    risk_class = %risk_class,
                    qualifier = sensitivity.qualifier(),
                    error = %e,
                    "risk weight lookup failed"
                );
                MarginError::from(e)
            })
    }
}

/// `risk_weight * amount * concentration_factor` with overflow detection.
fn weighted_value(
    risk_weight: Decimal,
    amount: Decimal,
    concentration_factor: Decimal,
) -> MarginResult<Decimal> {
    risk_weight
        .checked_mul(amount)
        .and_then(|v| v.checked_mul(concentration_factor))
        .ok_or_else(|| MarginError::overflow("weighted sensitivity"))
}
