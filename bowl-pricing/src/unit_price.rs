//! Per-unit pricing
//!
//! Tier pricing for the plain checkout path, and the blended
//! membership-plus-coupon discount used while a reward is active. Both
//! discounts are expressed as currency amounts so the two mechanisms
//! combine once instead of stacking percentages sequentially.

use crate::money::{to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::{MembershipTier, Product};

/// Effective per-unit price with no reward applied.
///
/// The tier price wins when configured (> 0); otherwise the standard
/// selling price, falling back to the net price when the selling price is
/// absent.
pub fn effective_price(product: &Product, tier: MembershipTier) -> f64 {
    if tier == MembershipTier::Golden && product.goldenmem_sellingprice > 0.0 {
        return product.goldenmem_sellingprice;
    }
    if tier == MembershipTier::Bowl && product.bowlmem_sellingprice > 0.0 {
        return product.bowlmem_sellingprice;
    }
    if product.selling_price > 0.0 {
        product.selling_price
    } else {
        product.net_price
    }
}

/// Per-unit price and discount breakdown under an active reward.
/// All amounts are rounded to 2 decimal places before any aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitPricing {
    /// Payable per-unit price before add-ons
    pub final_unit_price: f64,
    /// Net − selling saved by a non-member
    pub regular_discount: f64,
    /// Net − tier price saved by a member
    pub membership_discount: f64,
    /// Net × percentage saved by the coupon
    pub coupon_discount: f64,
    /// Blended amount actually taken off the net price
    pub effective_discount: f64,
}

/// Price one unit under a reward.
///
/// D1 is the membership discount (members) or the regular discount
/// (non-members); D2 is the coupon amount, always computed from the net
/// price. The blended amount is `D1 + D2 − (D1 × D2) / 100` — combining
/// the two as amounts rather than multiplying percentages, so neither
/// mechanism double-counts the other.
pub fn unit_pricing(product: &Product, tier: MembershipTier, coupon_percentage: f64) -> UnitPricing {
    let net = to_decimal(product.net_price);
    let hundred = Decimal::ONE_HUNDRED;

    let d2 = net * to_decimal(coupon_percentage) / hundred;
    let d1 = if tier.is_member() {
        (net - to_decimal(effective_price(product, tier))).max(Decimal::ZERO)
    } else {
        (net - to_decimal(product.selling_price)).max(Decimal::ZERO)
    };

    let effective = d1 + d2 - (d1 * d2) / hundred;
    let final_unit = (net - effective).max(Decimal::ZERO);

    UnitPricing {
        final_unit_price: to_f64(final_unit),
        regular_discount: if tier.is_member() { 0.0 } else { to_f64(d1) },
        membership_discount: if tier.is_member() { to_f64(d1) } else { 0.0 },
        coupon_discount: to_f64(d2),
        effective_discount: to_f64(effective),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(net: f64, selling: f64, bowl: f64, golden: f64) -> Product {
        Product {
            id: 1,
            category_id: None,
            product_name: "Test".to_string(),
            tagline: None,
            product_img: None,
            net_price: net,
            selling_price: selling,
            bowlmem_sellingprice: bowl,
            goldenmem_sellingprice: golden,
            is_active: true,
        }
    }

    #[test]
    fn test_effective_price_per_tier() {
        let p = make_product(60.0, 30.0, 40.0, 50.0);
        assert_eq!(effective_price(&p, MembershipTier::Golden), 50.0);
        assert_eq!(effective_price(&p, MembershipTier::Bowl), 40.0);
        assert_eq!(effective_price(&p, MembershipTier::None), 30.0);
    }

    #[test]
    fn test_effective_price_tier_without_tier_price() {
        // no golden price configured → golden members pay the selling price
        let p = make_product(60.0, 30.0, 40.0, 0.0);
        assert_eq!(effective_price(&p, MembershipTier::Golden), 30.0);
    }

    #[test]
    fn test_effective_price_falls_back_to_net() {
        let p = make_product(60.0, 0.0, 0.0, 0.0);
        assert_eq!(effective_price(&p, MembershipTier::None), 60.0);
    }

    #[test]
    fn test_blended_discount_non_member() {
        // net 100, selling 90 → D1 = 10; 10% coupon → D2 = 10
        // effective = 10 + 10 − (10 × 10)/100 = 19, final = 81
        let p = make_product(100.0, 90.0, 0.0, 0.0);
        let pricing = unit_pricing(&p, MembershipTier::None, 10.0);

        assert_eq!(pricing.regular_discount, 10.0);
        assert_eq!(pricing.membership_discount, 0.0);
        assert_eq!(pricing.coupon_discount, 10.0);
        assert_eq!(pricing.effective_discount, 19.0);
        assert_eq!(pricing.final_unit_price, 81.0);
    }

    #[test]
    fn test_blended_discount_member_uses_tier_price() {
        // golden price 70 → D1 = 30; 10% coupon → D2 = 10
        // effective = 30 + 10 − 3 = 37, final = 63
        let p = make_product(100.0, 90.0, 0.0, 70.0);
        let pricing = unit_pricing(&p, MembershipTier::Golden, 10.0);

        assert_eq!(pricing.membership_discount, 30.0);
        assert_eq!(pricing.regular_discount, 0.0);
        assert_eq!(pricing.effective_discount, 37.0);
        assert_eq!(pricing.final_unit_price, 63.0);
    }

    #[test]
    fn test_zero_coupon_reduces_to_tier_pricing() {
        let p = make_product(100.0, 90.0, 80.0, 0.0);
        let pricing = unit_pricing(&p, MembershipTier::Bowl, 0.0);

        // D2 = 0 → final price is just net − membership discount
        assert_eq!(pricing.final_unit_price, 80.0);
        assert_eq!(pricing.coupon_discount, 0.0);
        assert_eq!(pricing.effective_discount, 20.0);
    }

    #[test]
    fn test_final_price_never_negative() {
        // D1 = 95, D2 = 100 → blended exceeds net; clamp to zero
        let p = make_product(100.0, 5.0, 0.0, 0.0);
        let pricing = unit_pricing(&p, MembershipTier::None, 100.0);

        assert_eq!(pricing.final_unit_price, 0.0);
    }

    #[test]
    fn test_per_unit_amounts_rounded_to_cents() {
        // net 33.33, 7% coupon → D2 = 2.3331 → 2.33
        let p = make_product(33.33, 33.33, 0.0, 0.0);
        let pricing = unit_pricing(&p, MembershipTier::None, 7.0);

        assert_eq!(pricing.coupon_discount, 2.33);
        assert_eq!(pricing.final_unit_price, 31.0);
    }
}
