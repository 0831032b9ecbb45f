//! Process-wide registry of concentration variants keyed by risk class.
//!
//! # Example
//!
//! ```rust
//! use simm_margin::concentration::ConcentrationRegistry;
//! use simm_core::RiskClass;
//!
//! let registry = ConcentrationRegistry::global();
//! assert!(registry.supports(RiskClass::CreditQualifying));
//! assert!(registry.resolver(RiskClass::Fx).is_err());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use simm_core::{RiskClass, Sensitivity, WeightedSensitivity};

use super::{ConcentrationRisk, CreditQualifyingConcentration};
use crate::error::{MarginError, MarginResult};

/// Concentration variants indexed by risk class.
///
/// The global instance is built once on first access and never mutated.
/// Custom registries can be assembled with [`ConcentrationRegistry::empty`]
/// and [`ConcentrationRegistry::register`] before being handed to an engine.
#[derive(Debug)]
pub struct ConcentrationRegistry {
    resolvers: HashMap<RiskClass, Box<dyn ConcentrationRisk>>,
}

/// Global singleton registry.
static GLOBAL_REGISTRY: OnceLock<ConcentrationRegistry> = OnceLock::new();

impl ConcentrationRegistry {
    /// Returns the global registry.
    ///
    /// The registry is lazily initialized on first access and remains
    /// available for the lifetime of the program.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::new)
    }

    /// Creates a registry with every built-in variant.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CreditQualifyingConcentration::new()));
        registry
    }

    /// Creates a registry with no variants.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Registers a variant under its risk class, returning any variant it replaces.
    pub fn register(
        &mut self,
        variant: Box<dyn ConcentrationRisk>,
    ) -> Option<Box<dyn ConcentrationRisk>> {
        self.resolvers.insert(variant.risk_class(), variant)
    }

    /// Looks up the variant for a risk class.
    ///
    /// # Errors
    ///
    /// Returns [`MarginError::UnsupportedRiskClass`] if none is registered.
    pub fn resolver(&self, risk_class: RiskClass) -> MarginResult<&dyn ConcentrationRisk> {
        self.resolvers
            .get(&risk_class)
            .map(|variant| &**variant)
            .ok_or(MarginError::UnsupportedRiskClass(risk_class))
    }

    /// Returns true if a variant is registered for the risk class.
    #[must_use]
    pub fn supports(&self, risk_class: RiskClass) -> bool {
        self.resolvers.contains_key(&risk_class)
    }

    /// Risk classes with a registered variant, in SIMM order.
    #[must_use]
    pub fn risk_classes(&self) -> Vec<RiskClass> {
        let mut classes: Vec<_> = self.resolvers.keys().copied().collect();
        classes.sort();
        classes
    }
}

impl Default for ConcentrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Delta concentration factor for one sensitivity against its whole batch,
/// using the global registry.
pub fn delta_concentration_risk(
    risk_class: RiskClass,
    sensitivity: &Sensitivity,
    all: &[Sensitivity],
) -> MarginResult<Decimal> {
    ConcentrationRegistry::global()
        .resolver(risk_class)?
        .delta_concentration(sensitivity.qualifier(), sensitivity.bucket(), all)
}

/// Vega concentration factor for a qualifier, using the global registry.
pub fn vega_concentration_risk(
    risk_class: RiskClass,
    qualifier: &str,
    all: &[WeightedSensitivity<'_>],
) -> MarginResult<Decimal> {
    ConcentrationRegistry::global()
        .resolver(risk_class)?
        .vega_concentration(qualifier, all)
}
