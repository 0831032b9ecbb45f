//! Risk weighting of sensitivities.
//!
//! Turns a batch of sensitivities of one risk class into weighted
//! sensitivities:
//!
//! ```text
//! WS_k = RW_k * s_k * CR_k
//! ```
//!
//! where `RW_k` comes from a [`RiskWeightSource`](simm_core::RiskWeightSource)
//! and `CR_k` is the delta concentration factor of the sensitivity's qualifier
//! across the whole batch.

mod engine;

pub use engine::WeightingEngine;
