//! Order payload assembly
//!
//! Groups the priced selection into order items, copies the computed
//! totals, and stamps the transaction id. The POST itself lives on
//! [`crate::CafeClient`]; a successful submission is the caller's cue that
//! the applied reward transitioned to USED.

use bowl_pricing::{AddonCatalog, Quote, SelectionLine, effective_price};
use chrono::{DateTime, Utc};
use shared::models::{ClaimedReward, MembershipTier, OrderAddon, OrderItem, OrderPayload};

/// Build the `/orders` submission payload from a computed quote.
///
/// Items are grouped by product (quantities summed, first-seen order
/// preserved); `unit_price` is the effective tier price — the backend
/// re-derives reward discounts from `applied_reward` and
/// `discount_amount`.
pub fn build_order_payload(
    tier: MembershipTier,
    lines: &[SelectionLine],
    addons: &AddonCatalog,
    quote: &Quote,
    reward: Option<&ClaimedReward>,
    issued_at: DateTime<Utc>,
) -> OrderPayload {
    let mut items: Vec<OrderItem> = Vec::new();

    for line in lines.iter().filter(|l| l.quantity > 0) {
        if let Some(existing) = items.iter_mut().find(|i| i.product_id == line.product.id) {
            existing.quantity += line.quantity;
            continue;
        }

        let addon_lines: Vec<OrderAddon> = addons
            .selected_for(line)
            .iter()
            .map(|a| OrderAddon {
                ingredient_id: a.id,
                price: a.price,
            })
            .collect();

        items.push(OrderItem {
            product_id: line.product.id,
            quantity: line.quantity,
            unit_price: effective_price(&line.product, tier),
            addons: addon_lines,
        });
    }

    let discount = quote.discounts.claimed();

    OrderPayload {
        amount: quote.subtotal,
        gst_amount: quote.gst,
        final_amount: quote.final_amount,
        transaction_id: format!("TXN-{}", issued_at.timestamp_millis()),
        items,
        applied_reward: reward.cloned(),
        discount_amount: (discount > 0.0).then_some(discount),
        user_membership: tier,
    }
}
