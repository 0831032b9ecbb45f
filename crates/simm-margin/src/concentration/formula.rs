//! The concentration risk formula shared by every risk class.
//!
//! ```text
//! CR = max(1, sqrt(sum / threshold))
//! ```
//!
//! The sum is the signed net of all amounts sharing a qualifier, so long and
//! short positions offset each other. A net sum at or below the threshold
//! (including any net-short sum) yields exactly 1.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use simm_core::{RiskClass, RiskMeasure};

use crate::error::{MarginError, MarginResult};

/// Decimal places kept in a concentration factor.
///
/// The square root is taken at full `Decimal` precision and then rounded to
/// this scale with banker's rounding (`MidpointNearestEven`).
pub const CONCENTRATION_SCALE: u32 = 16;

/// Computes `max(1, sqrt(sum / threshold))`.
///
/// `risk_class` and `measure` identify the threshold in errors.
///
/// # Errors
///
/// - [`MarginError::InvalidThreshold`] if `threshold` is zero or negative
/// - [`MarginError::Overflow`] if the ratio cannot be represented
///
/// # Examples
///
/// ```
/// use simm_margin::concentration::concentration_factor;
/// use simm_core::{RiskClass, RiskMeasure};
/// use rust_decimal_macros::dec;
///
/// let cq = RiskClass::CreditQualifying;
/// let cr = concentration_factor(cq, RiskMeasure::Delta, dec!(3_800_000), dec!(950_000)).unwrap();
/// assert_eq!(cr, dec!(2));
///
/// let cr = concentration_factor(cq, RiskMeasure::Delta, dec!(100_000), dec!(290_000)).unwrap();
/// assert_eq!(cr, dec!(1));
/// ```
pub fn concentration_factor(
    risk_class: RiskClass,
    measure: RiskMeasure,
    sum: Decimal,
    threshold: Decimal,
) -> MarginResult<Decimal> {
    if threshold <= Decimal::ZERO {
        return Err(MarginError::InvalidThreshold {
            risk_class,
            measure,
            threshold,
        });
    }

    let ratio = sum
        .checked_div(threshold)
        .ok_or_else(|| MarginError::overflow("concentration ratio"))?;

    if ratio <= Decimal::ONE {
        return Ok(Decimal::ONE);
    }

    let root = ratio
        .sqrt()
        .ok_or_else(|| MarginError::overflow("concentration square root"))?;

    Ok(root
        .round_dp_with_strategy(CONCENTRATION_SCALE, RoundingStrategy::MidpointNearestEven)
        .max(Decimal::ONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const CQ: RiskClass = RiskClass::CreditQualifying;
    const DELTA: RiskMeasure = RiskMeasure::Delta;

    #[test]
    fn test_ratio_two_is_root_two() {
        let cr = concentration_factor(CQ, DELTA, dec!(1_900_000), dec!(950_000)).unwrap();
        assert_eq!(cr, dec!(1.4142135623730950));
        assert_eq!(cr.round_dp(8), dec!(1.41421356));
    }

    #[test]
    fn test_below_threshold_is_exactly_one() {
        let cr = concentration_factor(CQ, DELTA, dec!(100_000), dec!(290_000)).unwrap();
        assert_eq!(cr, Decimal::ONE);
        assert_eq!(cr.scale(), 0);
    }

    #[test]
    fn test_at_threshold_is_one() {
        let cr = concentration_factor(CQ, DELTA, dec!(290_000), dec!(290_000)).unwrap();
        assert_eq!(cr, Decimal::ONE);
    }

    #[test]
    fn test_net_short_is_one() {
        let cr = concentration_factor(CQ, DELTA, dec!(-5_000_000), dec!(290_000)).unwrap();
        assert_eq!(cr, Decimal::ONE);
    }

    #[test]
    fn test_perfect_square() {
        let cr = concentration_factor(CQ, DELTA, dec!(2_610_000), dec!(290_000)).unwrap();
        assert_eq!(cr, dec!(3));
    }

    #[test]
    fn test_rounded_to_scale() {
        let cr = concentration_factor(CQ, DELTA, dec!(3), dec!(1)).unwrap();
        assert!(cr.scale() <= CONCENTRATION_SCALE);
        assert_eq!(cr, dec!(1.7320508075688773));
    }

    #[test]
    fn test_invalid_threshold() {
        for threshold in [dec!(0), dec!(-1)] {
            let err = concentration_factor(CQ, DELTA, dec!(1), threshold).unwrap_err();
            assert_eq!(
                err,
                MarginError::InvalidThreshold {
                    risk_class: CQ,
                    measure: DELTA,
                    threshold
                }
            );
        }
        let err = concentration_factor(CQ, RiskMeasure::Vega, dec!(1), dec!(0)).unwrap_err();
        assert!(matches!(
            err,
            MarginError::InvalidThreshold { measure: RiskMeasure::Vega, .. }
        ));
    }

    #[test]
    fn test_ratio_overflow() {
        let err = concentration_factor(CQ, DELTA, Decimal::MAX, dec!(0.0000001)).unwrap_err();
        assert!(matches!(err, MarginError::Overflow { .. }));
    }
}
