//! Explicit cart state
//!
//! The storefront's cart as an owned store: the caller holds it, mutates
//! it through these methods, and hands fresh [`SelectionLine`] snapshots
//! to the pricing engine. Persistence, if any, wraps the store from the
//! outside — nothing here is global.

use bowl_pricing::SelectionLine;
use shared::models::Product;
use std::collections::HashMap;

/// One cart row.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
}

/// Owned cart state, one line per product.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product; an existing line increments.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Set a line's quantity; zero (or less) removes the line.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i32) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Snapshot for the engine. Add-on selections live in checkout state,
    /// keyed by product id, and are merged in here.
    pub fn selection(&self, selected_addons: &HashMap<i64, Vec<i64>>) -> Vec<SelectionLine> {
        self.lines
            .iter()
            .map(|line| {
                let addons = selected_addons
                    .get(&line.product.id)
                    .cloned()
                    .unwrap_or_default();
                SelectionLine::new(line.product.clone(), line.quantity).with_addons(addons)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64) -> Product {
        Product {
            id,
            category_id: None,
            product_name: format!("Product {}", id),
            tagline: None,
            product_img: None,
            net_price: 100.0,
            selling_price: 90.0,
            bowlmem_sellingprice: 0.0,
            goldenmem_sellingprice: 0.0,
            is_active: true,
        }
    }

    #[test]
    fn test_add_increments_existing_line() {
        let mut cart = CartStore::new();
        cart.add(make_product(1));
        cart.add(make_product(1));
        cart.add(make_product(2));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add(make_product(1));
        cart.add(make_product(2));

        cart.set_quantity(1, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, 2);

        cart.set_quantity(2, 5);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = CartStore::new();
        cart.add(make_product(1));
        cart.add(make_product(2));

        cart.remove(1);
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_selection_merges_addon_choices() {
        let mut cart = CartStore::new();
        cart.add(make_product(1));
        cart.add(make_product(2));

        let mut addons = HashMap::new();
        addons.insert(1, vec![10, 11]);

        let selection = cart.selection(&addons);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0].selected_addons, vec![10, 11]);
        assert!(selection[1].selected_addons.is_empty());
        assert!(selection.iter().all(|l| !l.locked));
    }
}
