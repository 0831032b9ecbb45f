//! # SIMM Margin
//!
//! Sensitivity weighting and concentration risk for ISDA SIMM.
//!
//! This crate turns the raw sensitivities of one risk class into weighted
//! sensitivities ready for bucket-level margin aggregation.
//!
//! ## Design Philosophy
//!
//! - **Exact decimals**: sums, ratios and products use `rust_decimal`; no `f64`
//! - **Immutable tables**: bucket groups and thresholds are built once per process
//! - **One formula**: every risk class shares `max(1, sqrt(sum / threshold))`
//! - **Typed failures**: an unclassifiable bucket fails the whole batch
//!
//! ## Quick Start
//!
//! ```rust
//! use simm_core::prelude::*;
//! use simm_margin::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let weights = RiskWeightTable::builder()
//!     .bucket_weights(RiskClass::CreditQualifying, &["1", "7"], dec!(85))
//!     .bucket_weight(RiskClass::CreditQualifying, "Residual", dec!(238))
//!     .build();
//!
//! let batch = vec![
//!     Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("1"), dec!(1_000_000)),
//!     Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("7"), dec!(900_000)),
//!     Sensitivity::new(RiskClass::CreditQualifying, "Issuer-R", Some("Residual"), dec!(100_000)),
//! ];
//!
//! let engine = WeightingEngine::new(&weights);
//! let weighted = engine.weight_sensitivities(RiskClass::CreditQualifying, &batch)?;
//!
//! assert_eq!(weighted.len(), 3);
//! assert_eq!(weighted[2].weighted_value(), dec!(23_800_000));
//! # Ok::<(), MarginError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`concentration`] - Bucket groups, thresholds, concentration factors, registry
//! - [`weighting`] - The batch weighting engine
//! - [`config`] - Engine execution settings
//! - [`error`] - Error taxonomy
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel weighting for large batches

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod concentration;
pub mod config;
pub mod error;
pub mod parallel;
pub mod weighting;

// Re-export error types at crate root
pub use error::{MarginError, MarginResult};

pub use concentration::{
    concentration_factor, delta_concentration_risk, vega_concentration_risk,
    ConcentrationRegistry, ConcentrationRisk, CreditQualifyingConcentration,
    CreditQualifyingGroup, QualifierSums, CONCENTRATION_SCALE,
};
pub use config::WeightingConfig;
pub use weighting::WeightingEngine;

/// Prelude module for convenient imports.
///
/// ```rust
/// use simm_margin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::concentration::{
        concentration_factor, ConcentrationRegistry, ConcentrationRisk,
        CreditQualifyingConcentration, CreditQualifyingGroup,
    };
    pub use crate::config::WeightingConfig;
    pub use crate::error::{MarginError, MarginResult};
    pub use crate::weighting::WeightingEngine;

    pub use rust_decimal::Decimal;
}
