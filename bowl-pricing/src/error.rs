//! Engine error types
//!
//! Local validation failures raised before any totals are computed. None
//! of these are retried; the caller blocks order submission and surfaces
//! the message.

use crate::scope::RewardScope;
use thiserror::Error;

/// Validation failures of the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Selection contains an item outside the active reward's scope
    #[error("this reward only applies to {scope}; choose eligible products only")]
    ScopeViolation { scope: RewardScope },

    /// Zero total quantity across all lines
    #[error("select products and quantities before placing the order")]
    EmptySelection,

    /// Negative quantity reached the engine (the UI should clamp first)
    #[error("quantity must be non-negative, got {quantity} for product {product_id}")]
    InvalidQuantity { product_id: i64, quantity: i32 },
}

/// Result type for engine operations.
pub type PricingResult<T> = Result<T, PricingError>;
