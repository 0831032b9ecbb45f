//! Error types for risk-weight lookups.
//!
//! A `RiskWeightSource` reports failures through [`LookupError`]. The margin
//! crates propagate these unmodified.

use thiserror::Error;

use crate::types::RiskClass;

/// Result type for risk-weight lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors raised by a risk-weight source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No weight is registered for the sensitivity.
    #[error("No risk weight for {risk_class} qualifier '{qualifier}' (bucket: {bucket})")]
    NotFound {
        /// Risk class of the sensitivity.
        risk_class: RiskClass,
        /// Qualifier of the sensitivity.
        qualifier: String,
        /// Bucket of the sensitivity, or `-` when it has none.
        bucket: String,
    },

    /// The source itself could not be consulted.
    #[error("Risk weight source unavailable: {0}")]
    Unavailable(String),
}

impl LookupError {
    /// Create a not-found error.
    #[must_use]
    pub fn not_found(
        risk_class: RiskClass,
        qualifier: impl Into<String>,
        bucket: Option<&str>,
    ) -> Self {
        Self::NotFound {
            risk_class,
            qualifier: qualifier.into(),
            bucket: bucket.unwrap_or("-").to_string(),
        }
    }
}
