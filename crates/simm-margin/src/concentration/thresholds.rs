//! Concentration threshold tables.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use rust_decimal::Decimal;
use simm_core::{RiskClass, RiskMeasure};

use crate::error::{MarginError, MarginResult};

/// Delta thresholds per bucket group plus a single vega threshold, in USD.
#[derive(Debug, Clone)]
pub struct ThresholdTable<G> {
    risk_class: RiskClass,
    delta: HashMap<G, Decimal>,
    vega: Decimal,
}

impl<G: Copy + Eq + Hash + fmt::Display> ThresholdTable<G> {
    /// Creates a table with the risk class's vega threshold and no delta entries.
    #[must_use]
    pub fn new(risk_class: RiskClass, vega: Decimal) -> Self {
        Self {
            risk_class,
            delta: HashMap::new(),
            vega,
        }
    }

    /// Sets the delta threshold of a bucket group.
    #[must_use]
    pub fn with_delta(mut self, group: G, threshold: Decimal) -> Self {
        self.delta.insert(group, threshold);
        self
    }

    /// Returns the threshold of a bucket group for a measure.
    ///
    /// Vega has one threshold for the whole risk class, so `group` only
    /// matters for delta.
    pub fn threshold(&self, measure: RiskMeasure, group: G) -> MarginResult<Decimal> {
        match measure {
            RiskMeasure::Delta => self.delta(group),
            RiskMeasure::Vega => Ok(self.vega),
        }
    }

    /// Returns the delta threshold of a bucket group.
    pub fn delta(&self, group: G) -> MarginResult<Decimal> {
        self.delta
            .get(&group)
            .copied()
            .ok_or_else(|| MarginError::MissingThreshold {
                risk_class: self.risk_class,
                measure: RiskMeasure::Delta,
                group: group.to_string(),
            })
    }

    /// Returns the vega threshold.
    #[must_use]
    pub fn vega(&self) -> Decimal {
        self.vega
    }
}
