//! Additional Ingredient (add-on) Model

use crate::de;
use serde::{Deserialize, Serialize};

/// Add-on ingredient entity.
///
/// Associated with exactly one product OR one category; the association is
/// the scoping key deciding which products it may attach to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Display name (the API serves this column as `ingredients`)
    #[serde(default, alias = "ingredient_name")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub price: f64,
}

/// Create ingredient payload (back office).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub ingredients: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Update ingredient payload (back office).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_scoped_addon() {
        let json = r#"{"id": 1, "product_id": 5, "ingredients": "Boba Pearls", "price": "20"}"#;
        let a: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(a.product_id, Some(5));
        assert_eq!(a.category_id, None);
        assert_eq!(a.price, 20.0);
    }

    #[test]
    fn test_category_scoped_addon() {
        let json = r#"{"id": 2, "category_id": 3, "ingredients": "Extra Shot", "price": 30.5}"#;
        let a: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(a.product_id, None);
        assert_eq!(a.category_id, Some(3));
        assert_eq!(a.price, 30.5);
    }
}
