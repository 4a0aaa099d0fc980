//! Shared types for the café ordering core
//!
//! Domain models served by the REST backend (products, categories,
//! add-on ingredients, rewards, members, orders) plus the typed
//! deserialization boundary that folds the backend's loosely-shaped
//! payloads into canonical types.

pub mod de;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ApiMessage, ListPayload};
