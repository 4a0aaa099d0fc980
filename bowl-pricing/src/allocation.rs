//! Free-item allocation for buy-X-get-Y rewards
//!
//! Every selection line expands into units (one per quantity count); the
//! cheapest in-scope units are marked free and the dearest stay payable —
//! the business keeps the high-value units on the bill.

use crate::scope::RewardScope;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// One unit of one selection line.
#[derive(Debug, Clone)]
pub(crate) struct SelectionUnit {
    pub product_id: i64,
    pub category_id: Option<i64>,
    /// Final unit price + per-unit add-on cost
    pub total_unit_price: Decimal,
}

/// Outcome of the free-unit allocation.
#[derive(Debug, Clone, Default)]
pub(crate) struct FreeAllocation {
    pub free_count: i32,
    pub by_product: BTreeMap<i64, i32>,
}

/// Allocate free units for a buy-X-get-Y reward.
///
/// `group = buy + get`; each full group of in-scope units earns `get` free
/// units. Exception: a product-targeted reward whose seeded (locked) line
/// holds exactly one group is guaranteed `min(get, units)`, so the
/// UI-seeded quantity always yields the intended free count even where
/// partial-group flooring would say zero.
pub(crate) fn allocate_free_units(
    units: &[SelectionUnit],
    scope: RewardScope,
    buy: i32,
    get: i32,
    target_locked: bool,
) -> FreeAllocation {
    if buy <= 0 || get <= 0 {
        return FreeAllocation::default();
    }

    let group = buy + get;
    let in_scope: Vec<&SelectionUnit> = units
        .iter()
        .filter(|u| scope.matches(u.product_id, u.category_id))
        .collect();
    let total = in_scope.len() as i32;

    let mut free_count = total / group * get;
    if matches!(scope, RewardScope::Product(_)) && target_locked && total == group {
        free_count = get.min(total);
    }
    if free_count <= 0 {
        return FreeAllocation::default();
    }

    // Cheapest units go free; stable sort keeps line order on price ties.
    let mut sorted = in_scope;
    sorted.sort_by_key(|u| u.total_unit_price);

    let mut by_product: BTreeMap<i64, i32> = BTreeMap::new();
    for unit in sorted.iter().take(free_count as usize) {
        *by_product.entry(unit.product_id).or_insert(0) += 1;
    }

    FreeAllocation {
        free_count,
        by_product,
    }
}
