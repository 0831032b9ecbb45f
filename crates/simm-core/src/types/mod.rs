//! Domain types for SIMM sensitivity weighting.

mod risk_class;
mod sensitivity;

pub use risk_class::{RiskClass, RiskMeasure};
pub use sensitivity::{Sensitivity, WeightedSensitivity};
