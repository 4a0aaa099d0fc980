//! Reward scope matching
//!
//! A reward may target one product, one category, or every product. Scope
//! decides which products can be configured with the reward and which
//! units participate in free-item allocation.

use crate::error::{PricingError, PricingResult};
use crate::selection::SelectionLine;
use shared::models::{ClaimedReward, Product};
use std::fmt;

/// Scope a reward applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardScope {
    Product(i64),
    Category(i64),
    Global,
}

impl RewardScope {
    /// Derive the scope from a reward row; a product target wins over a
    /// category target when both are set.
    pub fn of(reward: &ClaimedReward) -> Self {
        if let Some(product_id) = reward.product_id {
            Self::Product(product_id)
        } else if let Some(category_id) = reward.category_id {
            Self::Category(category_id)
        } else {
            Self::Global
        }
    }

    pub fn matches(&self, product_id: i64, category_id: Option<i64>) -> bool {
        match self {
            Self::Product(id) => product_id == *id,
            Self::Category(id) => category_id == Some(*id),
            Self::Global => true,
        }
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.matches(product.id, product.category_id)
    }
}

impl fmt::Display for RewardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product(id) => write!(f, "product {}", id),
            Self::Category(id) => write!(f, "category {}", id),
            Self::Global => write!(f, "all products"),
        }
    }
}

/// Products a reward can be configured with.
pub fn eligible_products(reward: &ClaimedReward, products: &[Product]) -> Vec<Product> {
    let scope = RewardScope::of(reward);
    products
        .iter()
        .filter(|p| scope.contains(p))
        .cloned()
        .collect()
}

/// Validate a selection snapshot against quantity rules and the active
/// reward's scope. Runs before any totals are computed; a failure means no
/// totals at all.
pub fn validate_selection(
    lines: &[SelectionLine],
    reward: Option<&ClaimedReward>,
) -> PricingResult<()> {
    for line in lines {
        if line.quantity < 0 {
            return Err(PricingError::InvalidQuantity {
                product_id: line.product.id,
                quantity: line.quantity,
            });
        }
    }

    let total: i64 = lines.iter().map(|l| l.quantity as i64).sum();
    if total == 0 {
        return Err(PricingError::EmptySelection);
    }

    if let Some(reward) = reward {
        let scope = RewardScope::of(reward);
        if lines
            .iter()
            .any(|l| l.quantity > 0 && !scope.contains(&l.product))
        {
            return Err(PricingError::ScopeViolation { scope });
        }
    }

    Ok(())
}
