//! Error types for sensitivity weighting.
//!
//! Every failure here is fatal for the batch being weighted: no error is ever
//! replaced by a default concentration factor or a zero weighted value.

use rust_decimal::Decimal;
use simm_core::{LookupError, RiskClass, RiskMeasure};
use thiserror::Error;

/// Result type for margin operations.
pub type MarginResult<T> = Result<T, MarginError>;

/// Errors that can occur while weighting sensitivities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarginError {
    /// The bucket belongs to no bucket group of the risk class.
    #[error("Bucket '{bucket}' is not in any {risk_class} bucket group")]
    UnclassifiableBucket {
        /// Risk class whose grouping was consulted.
        risk_class: RiskClass,
        /// The offending bucket identifier.
        bucket: String,
    },

    /// A bucketed risk class received a sensitivity without a bucket.
    #[error("{risk_class} sensitivity for qualifier '{qualifier}' has no bucket")]
    MissingBucket {
        /// Risk class that requires buckets.
        risk_class: RiskClass,
        /// Qualifier of the sensitivity.
        qualifier: String,
    },

    /// The risk-weight source failed.
    #[error(transparent)]
    RiskWeight(#[from] LookupError),

    /// A concentration threshold is zero or negative.
    #[error("Invalid {risk_class} {measure} concentration threshold: {threshold}")]
    InvalidThreshold {
        /// Risk class owning the threshold table.
        risk_class: RiskClass,
        /// Measure the threshold applies to.
        measure: RiskMeasure,
        /// The invalid threshold.
        threshold: Decimal,
    },

    /// A bucket group has no threshold for the measure.
    #[error("No {risk_class} {measure} threshold for bucket group {group}")]
    MissingThreshold {
        /// Risk class owning the threshold table.
        risk_class: RiskClass,
        /// Measure whose threshold is missing.
        measure: RiskMeasure,
        /// The bucket group without a threshold.
        group: String,
    },

    /// Decimal arithmetic overflowed.
    #[error("Decimal overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// No concentration variant is registered for the risk class.
    #[error("No concentration risk tables registered for {0}")]
    UnsupportedRiskClass(RiskClass),

    /// A sensitivity of another risk class was passed in the batch.
    #[error("Sensitivity '{qualifier}' is {found}, expected {expected}")]
    RiskClassMismatch {
        /// Risk class of the batch.
        expected: RiskClass,
        /// Risk class of the sensitivity.
        found: RiskClass,
        /// Qualifier of the sensitivity.
        qualifier: String,
    },

    /// Invalid engine configuration.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The configuration field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl MarginError {
    /// Create an unclassifiable bucket error.
    #[must_use]
    pub fn unclassifiable(risk_class: RiskClass, bucket: impl Into<String>) -> Self {
        Self::UnclassifiableBucket {
            risk_class,
            bucket: bucket.into(),
        }
    }

    /// Create an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
