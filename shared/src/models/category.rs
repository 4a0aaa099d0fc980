//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity. Categories scope both add-ons and rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default, alias = "name")]
    pub category_name: String,
    #[serde(default, alias = "image")]
    pub category_img: Option<String>,
}
