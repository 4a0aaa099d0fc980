//! Order Model

use crate::de;
use crate::models::{ClaimedReward, MembershipTier};
use serde::{Deserialize, Serialize};

/// Add-on line inside an order item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderAddon {
    pub ingredient_id: i64,
    pub price: f64,
}

/// One product line of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub addons: Vec<OrderAddon>,
}

/// Payload POSTed to `/orders`.
///
/// `amount` is the payable subtotal (post all discounts, pre-GST);
/// `applied_reward` carries the claimed-reward row so the backend can mark
/// it USED on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub amount: f64,
    pub gst_amount: f64,
    pub final_amount: f64,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_reward: Option<ClaimedReward>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    pub user_membership: MembershipTier,
}

/// Response body of `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
}

/// Order lifecycle as served by the backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Success,
    Completed,
    Cancelled,
}

/// Order history row (`GET /orders/my`, `GET /orders/{id}/full`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "de::flexible_price")]
    pub final_amount: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Body for `PATCH /orders/{id}/status` (back office).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
