//! Pricing & Reward Engine
//!
//! Pure computation from (membership tier, selection lines, optional
//! claimed reward, add-on catalog) to payable totals: tier pricing, the
//! blended membership/coupon discount, buy-X-get-Y free-item allocation,
//! and GST. No I/O and no shared state — callers fetch the catalog data
//! up front and pass a consistent selection snapshot per call, so the
//! engine can run on every quantity edit or add-on toggle.

mod allocation;
pub mod error;
pub mod money;
pub mod quote;
pub mod scope;
pub mod selection;
pub mod unit_price;

// Re-exports
pub use error::{PricingError, PricingResult};
pub use quote::{DiscountBreakdown, Quote, compute_cart_quote, compute_quote};
pub use scope::{RewardScope, eligible_products, validate_selection};
pub use selection::{AddonCatalog, SelectionLine, seed_selection, update_quantity};
pub use unit_price::{UnitPricing, effective_price, unit_pricing};
