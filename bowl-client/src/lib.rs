//! Café backend client
//!
//! Async REST client for the café ordering backend plus the client-side
//! state that feeds the pricing engine: the explicit cart store and the
//! order-payload builder. Network failures are never retried
//! automatically — they surface with the backend's own message and the
//! user re-submits.

pub mod cart;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;

// Re-exports
pub use cart::{CartLine, CartStore};
pub use checkout::build_order_payload;
pub use client::CafeClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
