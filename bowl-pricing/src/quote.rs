//! Quote computation
//!
//! Engine entry points: validate the selection, expand it into priced
//! units, run the free-item allocation when a buy/get reward is active,
//! and aggregate subtotal, GST and the discount breakdown. Totals are
//! recomputed on every change and never cached.

use crate::allocation::{FreeAllocation, SelectionUnit, allocate_free_units};
use crate::error::PricingResult;
use crate::money::{GST_RATE, round2, to_decimal, to_f64};
use crate::scope::{RewardScope, validate_selection};
use crate::selection::{AddonCatalog, SelectionLine};
use crate::unit_price::{effective_price, unit_pricing};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{ApplyOn, ClaimedReward, MembershipTier};
use std::collections::BTreeMap;

/// Informational discount breakdown, for display and audit only. The
/// payable amounts already have every discount applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DiscountBreakdown {
    /// Net − selling value saved by non-members
    pub regular: f64,
    /// Net − tier-price value saved by members
    pub membership: f64,
    /// Coupon value (net × percentage)
    pub coupon: f64,
    /// Value of the units marked free
    pub bogo: f64,
    /// Blended membership/coupon amount taken off the net price
    pub effective: f64,
}

impl DiscountBreakdown {
    /// Total value claimed by the reward: blended discount plus free items.
    pub fn claimed(&self) -> f64 {
        to_f64(to_decimal(self.effective) + to_decimal(self.bogo))
    }
}

/// Computed totals for one selection snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quote {
    /// Payable amount pre-GST, post all discounts and free-item exclusion
    pub subtotal: f64,
    /// 5% of subtotal, rounded half-up to 2 decimal places
    pub gst: f64,
    pub final_amount: f64,
    pub free_count: i32,
    /// product id → units marked free
    pub free_allocation: BTreeMap<i64, i32>,
    pub discounts: DiscountBreakdown,
    /// Claimed-reward row id; the caller needs it to mark the reward USED
    /// after a successful submission
    pub applied_reward: Option<i64>,
}

/// Totals for the plain cart/checkout screen (no reward applied).
pub fn compute_cart_quote(
    tier: MembershipTier,
    lines: &[SelectionLine],
    addons: &AddonCatalog,
) -> PricingResult<Quote> {
    compute_quote(tier, lines, None, addons)
}

/// Totals for a selection, with or without an active reward.
///
/// The caller is expected to pass ACTIVE rewards only; USED/EXPIRED
/// instances never reach the engine because the UI does not offer them.
pub fn compute_quote(
    tier: MembershipTier,
    lines: &[SelectionLine],
    reward: Option<&ClaimedReward>,
    addons: &AddonCatalog,
) -> PricingResult<Quote> {
    validate_selection(lines, reward)?;

    match reward {
        None => Ok(cart_totals(tier, lines, addons)),
        Some(reward) => Ok(reward_totals(tier, lines, reward, addons)),
    }
}

/// No-voucher path: effective tier price × quantity plus add-ons.
fn cart_totals(tier: MembershipTier, lines: &[SelectionLine], addons: &AddonCatalog) -> Quote {
    let mut subtotal = Decimal::ZERO;

    for line in lines.iter().filter(|l| l.quantity > 0) {
        let quantity = Decimal::from(line.quantity);
        let unit = to_decimal(effective_price(&line.product, tier))
            + to_decimal(addons.unit_addon_cost(line));
        subtotal += unit * quantity;
    }

    finish(subtotal, DiscountBreakdown::default(), FreeAllocation::default(), None)
}

/// Claim-reward path: blended per-unit pricing, then free-item allocation
/// for buy/get rewards.
fn reward_totals(
    tier: MembershipTier,
    lines: &[SelectionLine],
    reward: &ClaimedReward,
    addons: &AddonCatalog,
) -> Quote {
    let coupon_percentage = reward.coupon_percentage();

    let mut units_by_product: BTreeMap<i64, Vec<SelectionUnit>> = BTreeMap::new();
    let mut regular = Decimal::ZERO;
    let mut membership = Decimal::ZERO;
    let mut coupon = Decimal::ZERO;
    let mut effective = Decimal::ZERO;

    for line in lines.iter().filter(|l| l.quantity > 0) {
        let pricing = unit_pricing(&line.product, tier, coupon_percentage);
        let total_unit_price =
            to_decimal(pricing.final_unit_price) + to_decimal(addons.unit_addon_cost(line));

        for _ in 0..line.quantity {
            regular += to_decimal(pricing.regular_discount);
            membership += to_decimal(pricing.membership_discount);
            coupon += to_decimal(pricing.coupon_discount);
            effective += to_decimal(pricing.effective_discount);

            units_by_product
                .entry(line.product.id)
                .or_default()
                .push(SelectionUnit {
                    product_id: line.product.id,
                    category_id: line.product.category_id,
                    total_unit_price,
                });
        }
    }

    let allocation = if reward.apply_on == ApplyOn::Product {
        let scope = RewardScope::of(reward);
        let target_locked = reward
            .product_id
            .map(|pid| lines.iter().any(|l| l.product.id == pid && l.locked))
            .unwrap_or(false);
        let all_units: Vec<SelectionUnit> =
            units_by_product.values().flatten().cloned().collect();
        allocate_free_units(&all_units, scope, reward.buy, reward.get, target_locked)
    } else {
        FreeAllocation::default()
    };

    // Dearest units stay payable; the freed value is the BOGO discount.
    let mut subtotal = Decimal::ZERO;
    let mut bogo = Decimal::ZERO;
    for (product_id, units) in &units_by_product {
        let free = allocation.by_product.get(product_id).copied().unwrap_or(0) as usize;
        let payable = units.len().saturating_sub(free);

        let mut sorted = units.clone();
        sorted.sort_by(|a, b| b.total_unit_price.cmp(&a.total_unit_price));
        for (i, unit) in sorted.iter().enumerate() {
            if i < payable {
                subtotal += unit.total_unit_price;
            } else {
                bogo += unit.total_unit_price;
            }
        }
    }

    let discounts = DiscountBreakdown {
        regular: to_f64(regular),
        membership: to_f64(membership),
        coupon: to_f64(coupon),
        bogo: to_f64(bogo),
        effective: to_f64(effective),
    };

    finish(subtotal, discounts, allocation, Some(reward.user_reward_id))
}

fn finish(
    subtotal: Decimal,
    discounts: DiscountBreakdown,
    allocation: FreeAllocation,
    applied_reward: Option<i64>,
) -> Quote {
    let subtotal = round2(subtotal.max(Decimal::ZERO));
    let gst = round2(subtotal * GST_RATE);
    let final_amount = round2(subtotal + gst);

    Quote {
        subtotal: to_f64(subtotal),
        gst: to_f64(gst),
        final_amount: to_f64(final_amount),
        free_count: allocation.free_count,
        free_allocation: allocation.by_product,
        discounts,
        applied_reward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::selection::seed_selection;
    use shared::models::{Ingredient, Product, RewardStatus};

    fn make_product(id: i64, category_id: Option<i64>, net: f64, selling: f64) -> Product {
        Product {
            id,
            category_id,
            product_name: format!("Product {}", id),
            tagline: None,
            product_img: None,
            net_price: net,
            selling_price: selling,
            bowlmem_sellingprice: 0.0,
            goldenmem_sellingprice: 0.0,
            is_active: true,
        }
    }

    fn make_reward(apply_on: ApplyOn) -> ClaimedReward {
        ClaimedReward {
            user_reward_id: 77,
            reward_id: Some(4),
            coupon_code: "TEST".to_string(),
            apply_on,
            buy: 0,
            get: 0,
            percentage: 0.0,
            product_id: None,
            category_id: None,
            status: RewardStatus::Active,
            claimed_at: None,
        }
    }

    fn buy_get_reward(buy: i32, get: i32, product_id: Option<i64>) -> ClaimedReward {
        let mut reward = make_reward(ApplyOn::Product);
        reward.buy = buy;
        reward.get = get;
        reward.product_id = product_id;
        reward
    }

    fn price_reward(percentage: f64) -> ClaimedReward {
        let mut reward = make_reward(ApplyOn::Price);
        reward.percentage = percentage;
        reward
    }

    fn no_addons() -> AddonCatalog {
        AddonCatalog::default()
    }

    #[test]
    fn test_cart_quote_plain() {
        // 2 × 110 + 1 × 50 = 270; GST 13.50; total 283.50
        let lines = vec![
            SelectionLine::new(make_product(1, None, 120.0, 110.0), 2),
            SelectionLine::new(make_product(2, None, 60.0, 50.0), 1),
        ];
        let quote = compute_cart_quote(MembershipTier::None, &lines, &no_addons()).unwrap();

        assert_eq!(quote.subtotal, 270.0);
        assert_eq!(quote.gst, 13.5);
        assert_eq!(quote.final_amount, 283.5);
        assert_eq!(quote.free_count, 0);
        assert!(quote.free_allocation.is_empty());
        assert_eq!(quote.applied_reward, None);
    }

    #[test]
    fn test_cart_quote_with_addons() {
        let catalog = AddonCatalog::new(vec![Ingredient {
            id: 9,
            product_id: Some(1),
            category_id: None,
            ingredients: "Boba Pearls".to_string(),
            price: 20.0,
        }]);
        let lines =
            vec![SelectionLine::new(make_product(1, None, 120.0, 110.0), 2).with_addons(vec![9])];

        let quote = compute_cart_quote(MembershipTier::None, &lines, &catalog).unwrap();

        // (110 + 20) × 2 = 260
        assert_eq!(quote.subtotal, 260.0);
        assert_eq!(quote.gst, 13.0);
        assert_eq!(quote.final_amount, 273.0);
    }

    #[test]
    fn test_cart_quote_member_tier() {
        let mut product = make_product(1, None, 120.0, 110.0);
        product.bowlmem_sellingprice = 100.0;
        let lines = vec![SelectionLine::new(product, 1)];

        let quote = compute_cart_quote(MembershipTier::Bowl, &lines, &no_addons()).unwrap();
        assert_eq!(quote.subtotal, 100.0);
    }

    #[test]
    fn test_price_reward_quote() {
        // net 100, selling 90, 10% coupon → unit 81; 2 units → 162
        let lines = vec![SelectionLine::new(make_product(1, None, 100.0, 90.0), 2)];
        let reward = price_reward(10.0);

        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons()).unwrap();

        assert_eq!(quote.subtotal, 162.0);
        assert_eq!(quote.gst, 8.1);
        assert_eq!(quote.final_amount, 170.1);
        assert_eq!(quote.discounts.regular, 20.0);
        assert_eq!(quote.discounts.coupon, 20.0);
        assert_eq!(quote.discounts.effective, 38.0);
        assert_eq!(quote.discounts.bogo, 0.0);
        assert_eq!(quote.discounts.claimed(), 38.0);
        assert_eq!(quote.applied_reward, Some(77));
    }

    #[test]
    fn test_price_reward_addons_not_discounted() {
        let catalog = AddonCatalog::new(vec![Ingredient {
            id: 9,
            product_id: Some(1),
            category_id: None,
            ingredients: "Extra Shot".to_string(),
            price: 20.0,
        }]);
        let lines =
            vec![SelectionLine::new(make_product(1, None, 100.0, 90.0), 1).with_addons(vec![9])];

        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&price_reward(10.0)), &catalog)
                .unwrap();

        // 81 discounted unit + 20 add-on at full price
        assert_eq!(quote.subtotal, 101.0);
    }

    #[test]
    fn test_bogo_floor_allocation() {
        // 5 units at 100, buy 1 get 1 → 2 free, 3 payable
        let lines = vec![SelectionLine::new(make_product(5, None, 100.0, 100.0), 5)];
        let reward = buy_get_reward(1, 1, Some(5));

        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons()).unwrap();

        assert_eq!(quote.free_count, 2);
        assert_eq!(quote.free_allocation.get(&5), Some(&2));
        assert_eq!(quote.subtotal, 300.0);
        assert_eq!(quote.gst, 15.0);
        assert_eq!(quote.final_amount, 315.0);
        assert_eq!(quote.discounts.bogo, 200.0);
    }

    #[test]
    fn test_bogo_seeded_exact_free_count() {
        // UI-seeded flow: buy 2 get 1 seeds quantity 3, locked
        let reward = buy_get_reward(2, 1, Some(5));
        let lines = seed_selection(&reward, vec![make_product(5, None, 100.0, 100.0)]);
        assert!(lines[0].locked);
        assert_eq!(lines[0].quantity, 3);

        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons()).unwrap();
        assert_eq!(quote.free_count, 1);
        assert_eq!(quote.subtotal, 200.0);

        // buy 1 get 2 seeds quantity 3 → 2 free
        let reward = buy_get_reward(1, 2, Some(5));
        let lines = seed_selection(&reward, vec![make_product(5, None, 100.0, 100.0)]);
        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons()).unwrap();
        assert_eq!(quote.free_count, 2);
        assert_eq!(quote.subtotal, 100.0);
    }

    #[test]
    fn test_bogo_cheapest_unit_goes_free_across_category() {
        // category-scoped buy 1 get 1 over units priced 80 and 120
        let mut reward = buy_get_reward(1, 1, None);
        reward.category_id = Some(10);
        let lines = vec![
            SelectionLine::new(make_product(1, Some(10), 120.0, 120.0), 1),
            SelectionLine::new(make_product(2, Some(10), 80.0, 80.0), 1),
        ];

        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons()).unwrap();

        assert_eq!(quote.free_count, 1);
        assert_eq!(quote.free_allocation.get(&2), Some(&1));
        assert_eq!(quote.subtotal, 120.0);
        assert_eq!(quote.discounts.bogo, 80.0);
    }

    #[test]
    fn test_scope_rejection_computes_no_totals() {
        let reward = buy_get_reward(1, 1, Some(5));
        let lines = vec![SelectionLine::new(make_product(7, None, 100.0, 100.0), 1)];

        let err = compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons())
            .unwrap_err();
        assert!(matches!(err, PricingError::ScopeViolation { .. }));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let lines = vec![SelectionLine::new(make_product(1, None, 100.0, 100.0), 0)];
        let err = compute_cart_quote(MembershipTier::None, &lines, &no_addons()).unwrap_err();
        assert_eq!(err, PricingError::EmptySelection);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let mut reward = buy_get_reward(1, 1, None);
        reward.category_id = Some(10);
        let lines = vec![
            SelectionLine::new(make_product(1, Some(10), 120.0, 110.0), 3),
            SelectionLine::new(make_product(2, Some(10), 80.0, 75.0), 2),
        ];

        let first =
            compute_quote(MembershipTier::Bowl, &lines, Some(&reward), &no_addons()).unwrap();
        let second =
            compute_quote(MembershipTier::Bowl, &lines, Some(&reward), &no_addons()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gst_rounds_half_up_at_boundary() {
        // 3 × 3.35 = 10.05 → GST 0.5025 rounds down to 0.50
        let lines = vec![SelectionLine::new(make_product(1, None, 3.35, 3.35), 3)];
        let quote = compute_cart_quote(MembershipTier::None, &lines, &no_addons()).unwrap();
        assert_eq!(quote.subtotal, 10.05);
        assert_eq!(quote.gst, 0.5);
        assert_eq!(quote.final_amount, 10.55);

        // 2 × 5.05 = 10.10 → GST 0.505 rounds up to 0.51
        let lines = vec![SelectionLine::new(make_product(1, None, 5.05, 5.05), 2)];
        let quote = compute_cart_quote(MembershipTier::None, &lines, &no_addons()).unwrap();
        assert_eq!(quote.gst, 0.51);
        assert_eq!(quote.final_amount, 10.61);
    }

    #[test]
    fn test_global_bogo_spans_all_selected_products() {
        let reward = buy_get_reward(2, 1, None);
        let lines = vec![
            SelectionLine::new(make_product(1, None, 100.0, 100.0), 2),
            SelectionLine::new(make_product(2, None, 40.0, 40.0), 1),
        ];

        let quote =
            compute_quote(MembershipTier::None, &lines, Some(&reward), &no_addons()).unwrap();

        // 3 units, group 3 → 1 free; cheapest (40) goes free
        assert_eq!(quote.free_count, 1);
        assert_eq!(quote.free_allocation.get(&2), Some(&1));
        assert_eq!(quote.subtotal, 200.0);
    }
}
