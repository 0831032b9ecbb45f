//! SIMM risk classes and risk measures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SIMM risk class.
///
/// Each risk class carries its own bucket structure, risk weights and
/// concentration thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskClass {
    /// Interest rate risk.
    InterestRate,
    /// Credit risk on qualifying (rated, investment-style) names.
    CreditQualifying,
    /// Credit risk on non-qualifying names (e.g. securitisations).
    CreditNonQualifying,
    /// Equity risk.
    Equity,
    /// Commodity risk.
    Commodity,
    /// Foreign exchange risk.
    Fx,
}

impl RiskClass {
    /// All risk classes in SIMM declaration order.
    pub const ALL: [RiskClass; 6] = [
        RiskClass::InterestRate,
        RiskClass::CreditQualifying,
        RiskClass::CreditNonQualifying,
        RiskClass::Equity,
        RiskClass::Commodity,
        RiskClass::Fx,
    ];

    /// Returns the CRIF name of the risk class.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::InterestRate => "Rates",
            RiskClass::CreditQualifying => "CreditQ",
            RiskClass::CreditNonQualifying => "CreditNonQ",
            RiskClass::Equity => "Equity",
            RiskClass::Commodity => "Commodity",
            RiskClass::Fx => "FX",
        }
    }

    /// Parses a risk class from its CRIF name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "rates" | "interestrate" => Some(RiskClass::InterestRate),
            "creditq" | "creditqualifying" => Some(RiskClass::CreditQualifying),
            "creditnonq" | "creditnonqualifying" => Some(RiskClass::CreditNonQualifying),
            "equity" => Some(RiskClass::Equity),
            "commodity" => Some(RiskClass::Commodity),
            "fx" => Some(RiskClass::Fx),
            _ => None,
        }
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The sensitivity measure a threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskMeasure {
    /// First-order sensitivity to the risk factor.
    Delta,
    /// Sensitivity to the implied volatility of the risk factor.
    Vega,
}

impl RiskMeasure {
    /// Returns the name of the measure.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskMeasure::Delta => "Delta",
            RiskMeasure::Vega => "Vega",
        }
    }
}

impl fmt::Display for RiskMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
