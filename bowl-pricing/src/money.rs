//! Money helpers using rust_decimal for precision
//!
//! All pricing math runs on `Decimal`; amounts cross the engine boundary
//! as `f64` rounded to 2 decimal places. Rounding is half-up
//! (`MidpointAwayFromZero`) — a billing convention chosen here, not a
//! backend-derived requirement.

use rust_decimal::prelude::*;

/// Monetary values round to 2 decimal places.
pub(crate) const DECIMAL_PLACES: u32 = 2;

/// GST rate applied to the payable subtotal (5%).
pub const GST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation.
///
/// Catalog prices are deserialized through the typed boundary and are
/// always finite; if NaN/Infinity somehow reaches here, log and default to
/// zero rather than corrupt a monetary calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for output, rounded to 2 decimal places.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value).to_f64().unwrap_or_default()
}

/// Round to 2 decimal places, half-up.
#[inline]
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        // 10.005 → 10.01 (half-up, not banker's)
        assert_eq!(round2(Decimal::new(10005, 3)), Decimal::new(1001, 2));
        // 0.5025 → 0.50
        assert_eq!(round2(Decimal::new(5025, 4)), Decimal::new(50, 2));
        // 4.99975 → 5.00
        assert_eq!(round2(Decimal::new(499975, 5)), Decimal::new(500, 2));
    }

    #[test]
    fn test_to_f64_rounds() {
        assert_eq!(to_f64(Decimal::new(81005, 3)), 81.01);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_gst_rate_is_five_percent() {
        assert_eq!(GST_RATE.to_string(), "0.05");
    }
}
