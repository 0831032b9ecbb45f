//! Credit-qualifying concentration tables (ISDA SIMM 2.0).
//!
//! | Group          | Buckets                | Delta threshold (USD) |
//! |----------------|------------------------|-----------------------|
//! | Sovereign      | 1, 7                   | 0.95 mm               |
//! | Corporate      | 2-6, 8-12              | 0.29 mm               |
//! | Not classified | Residual (any case)    | 0.29 mm               |
//!
//! A single vega threshold of 290 mm applies to every bucket.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use simm_core::{RiskClass, RiskMeasure};
use tracing::warn;

use super::{BucketGroups, BucketMatch, ConcentrationRisk, ThresholdTable};
use crate::error::{MarginError, MarginResult};

const MM: Decimal = dec!(1_000_000);

const SOVEREIGN_BUCKETS: &[&str] = &["1", "7"];
const CORPORATE_BUCKETS: &[&str] = &["2", "3", "4", "5", "6", "8", "9", "10", "11", "12"];
const NOT_CLASSIFIED_BUCKETS: &[&str] = &["Residual"];

/// Credit-qualifying bucket groups sharing a delta threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditQualifyingGroup {
    /// Sovereigns including central banks.
    Sovereign,
    /// Corporate issuers of every sector and rating.
    Corporate,
    /// The residual bucket.
    NotClassified,
}

impl CreditQualifyingGroup {
    /// Returns the group name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditQualifyingGroup::Sovereign => "Sovereign",
            CreditQualifyingGroup::Corporate => "Corporate",
            CreditQualifyingGroup::NotClassified => "NotClassified",
        }
    }
}

impl fmt::Display for CreditQualifyingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Concentration risk tables for the credit-qualifying risk class.
#[derive(Debug, Clone)]
pub struct CreditQualifyingConcentration {
    groups: BucketGroups<CreditQualifyingGroup>,
    thresholds: ThresholdTable<CreditQualifyingGroup>,
}

impl CreditQualifyingConcentration {
    /// Creates the variant with SIMM 2.0 tables.
    #[must_use]
    pub fn new() -> Self {
        let groups = BucketGroups::new(RiskClass::CreditQualifying)
            .group(
                CreditQualifyingGroup::Sovereign,
                BucketMatch::Exact(SOVEREIGN_BUCKETS),
            )
            .group(
                CreditQualifyingGroup::Corporate,
                BucketMatch::Exact(CORPORATE_BUCKETS),
            )
            .group(
                CreditQualifyingGroup::NotClassified,
                BucketMatch::IgnoreCase(NOT_CLASSIFIED_BUCKETS),
            );

        let thresholds = ThresholdTable::new(RiskClass::CreditQualifying, dec!(290) * MM)
            .with_delta(CreditQualifyingGroup::Sovereign, dec!(0.95) * MM)
            .with_delta(CreditQualifyingGroup::Corporate, dec!(0.29) * MM)
            .with_delta(CreditQualifyingGroup::NotClassified, dec!(0.29) * MM);

        Self { groups, thresholds }
    }

    /// Classifies a bucket into its group.
    ///
    /// # Errors
    ///
    /// Returns [`MarginError::UnclassifiableBucket`] for anything outside
    /// buckets 1-12 and Residual.
    pub fn classify(&self, bucket: &str) -> MarginResult<CreditQualifyingGroup> {
        self.groups.classify(bucket)
    }

    /// Threshold of a bucket group for a measure.
    pub fn group_threshold(
        &self,
        measure: RiskMeasure,
        group: CreditQualifyingGroup,
    ) -> MarginResult<Decimal> {
        self.thresholds.threshold(measure, group)
    }
}

impl Default for CreditQualifyingConcentration {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcentrationRisk for CreditQualifyingConcentration {
    fn risk_class(&self) -> RiskClass {
        RiskClass::CreditQualifying
    }

    fn delta_threshold(&self, qualifier: &str, bucket: Option<&str>) -> MarginResult<Decimal> {
        let Some(bucket) = bucket else {
            warn!(qualifier, "credit-qualifying sensitivity without bucket");
            return Err(MarginError::MissingBucket {
                risk_class: RiskClass::CreditQualifying,
                qualifier: qualifier.to_string(),
            });
        };

        let group = self.classify(bucket).map_err(|e| {
            warn!(qualifier, bucket, error = %e, "bucket not in any group");
            e
        })?;
        self.group_threshold(RiskMeasure::Delta, group)
    }

    fn vega_threshold(&self) -> Decimal {
        self.thresholds.vega()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simm_core::{Sensitivity, WeightedSensitivity};

    fn cq(qualifier: &str, bucket: &str, amount: Decimal) -> Sensitivity {
        Sensitivity::new(RiskClass::CreditQualifying, qualifier, Some(bucket), amount)
    }

    #[test]
    fn test_classify_legal_buckets() {
        let cq = CreditQualifyingConcentration::new();
        for b in ["1", "7"] {
            assert_eq!(cq.classify(b).unwrap(), CreditQualifyingGroup::Sovereign);
        }
        for b in ["2", "3", "4", "5", "6", "8", "9", "10", "11", "12"] {
            assert_eq!(cq.classify(b).unwrap(), CreditQualifyingGroup::Corporate);
        }
        for b in ["Residual", "residual", "RESIDUAL"] {
            assert_eq!(cq.classify(b).unwrap(), CreditQualifyingGroup::NotClassified);
        }
    }

    #[test]
    fn test_classify_rejects_unknown() {
        let cq = CreditQualifyingConcentration::new();
        for b in ["0", "13", "99", "", " 1", "01", "Resid"] {
            assert_eq!(
                cq.classify(b).unwrap_err(),
                MarginError::unclassifiable(RiskClass::CreditQualifying, b)
            );
        }
    }

    #[test]
    fn test_thresholds() {
        let cq = CreditQualifyingConcentration::new();
        assert_eq!(cq.delta_threshold("A", Some("1")).unwrap(), dec!(950_000));
        assert_eq!(cq.delta_threshold("A", Some("12")).unwrap(), dec!(290_000));
        assert_eq!(cq.delta_threshold("A", Some("Residual")).unwrap(), dec!(290_000));
        assert_eq!(cq.vega_threshold(), dec!(290_000_000));
        assert_eq!(
            cq.group_threshold(RiskMeasure::Vega, CreditQualifyingGroup::Sovereign)
                .unwrap(),
            dec!(290_000_000)
        );
    }

    #[test]
    fn test_missing_bucket() {
        let cq = CreditQualifyingConcentration::new();
        assert_eq!(
            cq.delta_threshold("Issuer-A", None).unwrap_err(),
            MarginError::MissingBucket {
                risk_class: RiskClass::CreditQualifying,
                qualifier: "Issuer-A".to_string()
            }
        );
    }

    #[test]
    fn test_sovereign_root_two() {
        let variant = CreditQualifyingConcentration::new();
        let all = vec![
            cq("Issuer-A", "1", dec!(1_000_000)),
            cq("Issuer-A", "1", dec!(900_000)),
            cq("Issuer-B", "1", dec!(50_000_000)),
        ];
        let cr = variant.delta_concentration("Issuer-A", Some("1"), &all).unwrap();
        assert_eq!(cr, dec!(1.4142135623730950));
    }

    #[test]
    fn test_residual_below_threshold() {
        let variant = CreditQualifyingConcentration::new();
        let all = vec![cq("Issuer-R", "Residual", dec!(100_000))];
        let cr = variant
            .delta_concentration("Issuer-R", Some("Residual"), &all)
            .unwrap();
        assert_eq!(cr, Decimal::ONE);
    }

    #[test]
    fn test_unmapped_bucket_fails() {
        let variant = CreditQualifyingConcentration::new();
        let all = vec![cq("Issuer-X", "99", dec!(100_000))];
        let err = variant
            .delta_concentration("Issuer-X", Some("99"), &all)
            .unwrap_err();
        assert_eq!(err, MarginError::unclassifiable(RiskClass::CreditQualifying, "99"));
    }

    #[test]
    fn test_long_short_net() {
        let variant = CreditQualifyingConcentration::new();
        let all = vec![
            cq("Issuer-A", "3", dec!(5_000_000)),
            cq("Issuer-A", "3", dec!(-4_900_000)),
        ];
        let cr = variant.delta_concentration("Issuer-A", Some("3"), &all).unwrap();
        assert_eq!(cr, Decimal::ONE);
    }

    #[test]
    fn test_vega_concentration() {
        let variant = CreditQualifyingConcentration::new();
        let all = vec![
            cq("Issuer-V", "2", dec!(1)),
            cq("Issuer-V", "4", dec!(1)),
            cq("Other", "4", dec!(1)),
        ];
        let weighted = vec![
            WeightedSensitivity::new(&all[0], dec!(700_000_000)),
            WeightedSensitivity::new(&all[1], dec!(460_000_000)),
            WeightedSensitivity::new(&all[2], dec!(10_000_000_000)),
        ];
        // 1_160mm / 290mm = 4
        let cr = variant.vega_concentration("Issuer-V", &weighted).unwrap();
        assert_eq!(cr, dec!(2));

        let cr = variant.vega_concentration("Nobody", &weighted).unwrap();
        assert_eq!(cr, Decimal::ONE);
    }
}
