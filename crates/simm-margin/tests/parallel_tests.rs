//! Rayon-backed weighting must match the sequential path exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use simm_core::prelude::*;
use simm_margin::prelude::*;

const CQ: RiskClass = RiskClass::CreditQualifying;

const BUCKETS: [&str; 5] = ["1", "2", "7", "12", "Residual"];

fn flat_weights() -> RiskWeightTable {
    RiskWeightTable::builder()
        .bucket_weights(CQ, &BUCKETS, dec!(97))
        .build()
}

fn large_batch(size: usize) -> Vec<Sensitivity> {
    (0..size)
        .map(|i| {
            Sensitivity::new(
                CQ,
                format!("Issuer-{}", i % 40),
                Some(BUCKETS[i % BUCKETS.len()]),
                Decimal::from(10_000 + i as i64 * 37),
            )
        })
        .collect()
}

#[test]
fn parallel_config_takes_rayon_path() {
    let config = WeightingConfig::new().with_threshold(100);
    assert!(config.should_parallelize(3000));
    assert!(!WeightingConfig::sequential().should_parallelize(3000));
}

#[test]
fn parallel_matches_sequential_in_order() {
    let weights = flat_weights();
    let batch = large_batch(3000);

    let sequential = WeightingEngine::new(&weights)
        .with_config(WeightingConfig::sequential())
        .weight_sensitivities(CQ, &batch)
        .unwrap();
    let parallel = WeightingEngine::new(&weights)
        .with_config(WeightingConfig::new().with_threshold(100))
        .weight_sensitivities(CQ, &batch)
        .unwrap();

    assert_eq!(parallel.len(), batch.len());
    assert_eq!(sequential, parallel);
    for (ws, s) in parallel.iter().zip(&batch) {
        assert!(std::ptr::eq(ws.sensitivity(), s));
    }
}

#[test]
fn parallel_batch_fails_on_unmapped_bucket() {
    let weights = flat_weights();
    let mut batch = large_batch(3000);
    batch[1777] = Sensitivity::new(CQ, "Issuer-X", Some("99"), dec!(1));

    let err = WeightingEngine::new(&weights)
        .with_config(WeightingConfig::new().with_threshold(100))
        .weight_sensitivities(CQ, &batch)
        .unwrap_err();

    assert_eq!(err, MarginError::unclassifiable(CQ, "99"));
}

#[test]
fn parallel_batch_propagates_lookup_failure() {
    let weights = RiskWeightTable::builder()
        .bucket_weights(CQ, &BUCKETS[..4], dec!(97))
        .build();
    let batch = large_batch(3000);

    let err = WeightingEngine::new(&weights)
        .with_config(WeightingConfig::new().with_threshold(100))
        .weight_sensitivities(CQ, &batch)
        .unwrap_err();

    assert!(matches!(
        err,
        MarginError::RiskWeight(LookupError::NotFound { ref bucket, .. }) if bucket == "Residual"
    ));
}
