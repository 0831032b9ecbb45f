//! # SIMM Core
//!
//! Core types and lookup traits for ISDA SIMM sensitivity weighting.
//!
//! This crate provides the building blocks shared by the margin crates:
//!
//! - **Types**: `RiskClass`, `RiskMeasure`, `Sensitivity`, `WeightedSensitivity`
//! - **Traits**: `RiskWeightSource`, the seam through which risk weights are
//!   supplied by the surrounding system
//! - **Tables**: `RiskWeightTable`, an in-memory `RiskWeightSource`
//!
//! ## Design Philosophy
//!
//! - **Exact arithmetic**: every amount is a `rust_decimal::Decimal`
//! - **Immutable records**: sensitivities expose accessors only
//! - **Borrowed results**: a weighted sensitivity points at its source
//!
//! ## Example
//!
//! ```rust
//! use simm_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let s = Sensitivity::new(RiskClass::CreditQualifying, "Issuer-A", Some("1"), dec!(250_000));
//! let weighted = WeightedSensitivity::new(&s, dec!(21_250_000));
//! assert_eq!(weighted.sensitivity().qualifier(), "Issuer-A");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{LookupError, LookupResult};
    pub use crate::traits::{RiskWeightSource, RiskWeightTable, RiskWeightTableBuilder};
    pub use crate::types::{RiskClass, RiskMeasure, Sensitivity, WeightedSensitivity};
}

// Re-export commonly used types at crate root
pub use error::{LookupError, LookupResult};
pub use traits::{RiskWeightSource, RiskWeightTable};
pub use types::{RiskClass, RiskMeasure, Sensitivity, WeightedSensitivity};
