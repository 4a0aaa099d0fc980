//! Typed boundary for the API's list payload shapes
//!
//! List endpoints return either a bare array or an object wrapping the
//! array under an endpoint-specific key (`{"data": […]}`,
//! `{"rewards": […]}`, `{"additional_ingredients": […]}`). `ListPayload`
//! folds every observed shape into a `Vec<T>` at deserialization time; an
//! unrecognized shape is a decode error, never a silent empty list.

use serde::Deserialize;

/// Every list shape the backend has been observed to serve.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Bare array
    Plain(Vec<T>),
    /// `{"data": […]}`
    Wrapped { data: Vec<T> },
    /// `{"rewards": […]}`
    Rewards { rewards: Vec<T> },
    /// `{"additional_ingredients": […]}`
    Ingredients { additional_ingredients: Vec<T> },
    /// `{"additionalIngredients": […]}`
    IngredientsCamel {
        #[serde(rename = "additionalIngredients")]
        additional_ingredients: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    /// Unwrap to the canonical item list regardless of the wire shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Plain(items) => items,
            Self::Wrapped { data } => data,
            Self::Rewards { rewards } => rewards,
            Self::Ingredients {
                additional_ingredients,
            }
            | Self::IngredientsCamel {
                additional_ingredients,
            } => additional_ingredients,
        }
    }
}

/// Generic acknowledgement body for mutations whose payload the caller
/// doesn't otherwise need (deletes, bulk status flips).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
