//! Selection lines and the add-on catalog
//!
//! A selection is the ephemeral input the engine prices: one line per
//! product with a quantity and the add-on ids chosen for it. Lines are
//! rebuilt fresh per checkout or claim session — no ambient cart state
//! reaches the engine.

use shared::models::{ApplyOn, ClaimedReward, Ingredient, Product};
use std::collections::HashMap;

/// One configurable line of a checkout or claim-reward selection.
///
/// `locked` pins the UI-seeded quantity of a reward's targeted product;
/// the engine treats locked lines as immutable for the duration of one
/// computation.
#[derive(Debug, Clone)]
pub struct SelectionLine {
    pub product: Product,
    pub quantity: i32,
    pub selected_addons: Vec<i64>,
    pub locked: bool,
}

impl SelectionLine {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self {
            product,
            quantity,
            selected_addons: Vec::new(),
            locked: false,
        }
    }

    pub fn with_addons(mut self, selected_addons: Vec<i64>) -> Self {
        self.selected_addons = selected_addons;
        self
    }
}

/// Index of add-on ingredients by their scoping key.
///
/// A product's available add-ons are the ones bound to it directly; when
/// none are, the ones bound to its category.
#[derive(Debug, Clone, Default)]
pub struct AddonCatalog {
    by_product: HashMap<i64, Vec<Ingredient>>,
    by_category: HashMap<i64, Vec<Ingredient>>,
}

impl AddonCatalog {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let mut by_product: HashMap<i64, Vec<Ingredient>> = HashMap::new();
        let mut by_category: HashMap<i64, Vec<Ingredient>> = HashMap::new();

        for ingredient in ingredients {
            if let Some(product_id) = ingredient.product_id {
                by_product
                    .entry(product_id)
                    .or_default()
                    .push(ingredient.clone());
            }
            if let Some(category_id) = ingredient.category_id {
                by_category.entry(category_id).or_default().push(ingredient);
            }
        }

        Self {
            by_product,
            by_category,
        }
    }

    /// Add-ons a product may attach (product binding wins over category).
    pub fn available_for(&self, product: &Product) -> &[Ingredient] {
        if let Some(list) = self.by_product.get(&product.id) {
            return list;
        }
        product
            .category_id
            .and_then(|cid| self.by_category.get(&cid))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a line's selected add-on ids against the catalog.
    /// Ids that don't resolve (stale UI state) are skipped.
    pub fn selected_for(&self, line: &SelectionLine) -> Vec<&Ingredient> {
        let available = self.available_for(&line.product);
        line.selected_addons
            .iter()
            .filter_map(|id| available.iter().find(|a| a.id == *id))
            .collect()
    }

    /// Per-unit add-on cost for a line. Add-on cost is never discounted.
    pub fn unit_addon_cost(&self, line: &SelectionLine) -> f64 {
        self.selected_for(line).iter().map(|a| a.price).sum()
    }
}

/// Seed the claim-reward selection from the reward's eligible products.
///
/// A product-targeted buy/get reward pre-fills its product at `buy + get`
/// units and locks the line; percentage rewards start every eligible line
/// at one unit; everything else starts at zero.
pub fn seed_selection(reward: &ClaimedReward, eligible: Vec<Product>) -> Vec<SelectionLine> {
    let targeted_buy_get = reward.apply_on == ApplyOn::Product
        && reward.buy > 0
        && reward.get > 0
        && reward.product_id.is_some();

    eligible
        .into_iter()
        .map(|product| {
            let is_target = targeted_buy_get && reward.product_id == Some(product.id);
            let quantity = if is_target {
                reward.buy + reward.get
            } else if reward.apply_on == ApplyOn::Price {
                1
            } else {
                0
            };
            SelectionLine {
                product,
                quantity,
                selected_addons: Vec::new(),
                locked: is_target,
            }
        })
        .collect()
}

/// Apply a quantity edit, respecting locked lines and the
/// percentage-reward minimum of one unit per line.
pub fn update_quantity(
    lines: &mut [SelectionLine],
    reward: &ClaimedReward,
    product_id: i64,
    quantity: i32,
) {
    let min = if reward.apply_on == ApplyOn::Price { 1 } else { 0 };
    if let Some(line) = lines.iter_mut().find(|l| l.product.id == product_id) {
        if line.locked {
            return;
        }
        line.quantity = quantity.max(min);
    }
}
