//! Product Model

use crate::de;
use serde::{Deserialize, Serialize};

/// Product entity as served by the catalog API.
///
/// `net_price` is the undiscounted base price, `selling_price` the
/// standard non-member price. A member price of 0 means the tier has no
/// special price for this product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "product_id")]
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, alias = "name")]
    pub product_name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, alias = "image")]
    pub product_img: Option<String>,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub net_price: f64,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub selling_price: f64,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub bowlmem_sellingprice: f64,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub goldenmem_sellingprice: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
