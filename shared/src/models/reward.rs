//! Reward Model

use crate::de;
use serde::{Deserialize, Serialize};

/// How a reward applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplyOn {
    /// Percentage off the net price of eligible items
    Price,
    /// Buy X get Y free
    Product,
}

/// Lifecycle of a claimed reward. The engine only operates on ACTIVE
/// rewards; ACTIVE → USED is performed by the order-submission backend,
/// ACTIVE → EXPIRED is time-based and set externally.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardStatus {
    #[default]
    Active,
    Used,
    Expired,
}

/// Reward rule as configured in the back office.
///
/// Optional `product_id`/`category_id` restrict which selected items the
/// reward may apply to; unscoped rewards apply across all selected items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: i64,
    #[serde(default)]
    pub coupon_code: String,
    pub apply_on: ApplyOn,
    #[serde(default)]
    pub buy: i32,
    #[serde(default)]
    pub get: i32,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub percentage: f64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// A reward instance claimed by a user (`GET /rewards/user/{id}` row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimedReward {
    #[serde(alias = "id")]
    pub user_reward_id: i64,
    #[serde(default)]
    pub reward_id: Option<i64>,
    #[serde(default)]
    pub coupon_code: String,
    pub apply_on: ApplyOn,
    #[serde(default)]
    pub buy: i32,
    #[serde(default)]
    pub get: i32,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub percentage: f64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub status: RewardStatus,
    #[serde(default)]
    pub claimed_at: Option<String>,
}

impl ClaimedReward {
    pub fn is_active(&self) -> bool {
        self.status == RewardStatus::Active
    }

    /// Coupon percentage for pricing: only PRICE rewards discount by
    /// percentage, and out-of-range admin input is clamped to [0, 100].
    pub fn coupon_percentage(&self) -> f64 {
        match self.apply_on {
            ApplyOn::Price => self.percentage.clamp(0.0, 100.0),
            ApplyOn::Product => 0.0,
        }
    }
}

/// Create reward payload (back office).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardCreate {
    pub coupon_code: String,
    pub apply_on: ApplyOn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Update reward payload (back office).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_on: Option<ApplyOn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Response body of `POST /rewards/claim`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_reward_id: Option<i64>,
}
