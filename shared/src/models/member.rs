//! Member Model

use crate::de;
use serde::{Deserialize, Serialize};

/// Membership tier. Unlocks progressively better per-product pricing;
/// golden outranks bowl when a user somehow carries both flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    #[default]
    None,
    Bowl,
    Golden,
}

impl MembershipTier {
    /// Derive the tier from the profile's membership flags.
    pub fn from_flags(bowl: bool, golden: bool) -> Self {
        if golden {
            Self::Golden
        } else if bowl {
            Self::Bowl
        } else {
            Self::None
        }
    }

    pub fn is_member(self) -> bool {
        self != Self::None
    }

    /// Wire form used in the order payload (`user_membership`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Bowl => "BOWL",
            Self::Golden => "GOLDEN",
        }
    }
}

/// User profile as served by the session provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::flexible_flag")]
    pub bowl_membership: bool,
    #[serde(default, deserialize_with = "de::flexible_flag")]
    pub golden_membership: bool,
    /// Loyalty points balance
    #[serde(default)]
    pub stars: i64,
}

impl UserProfile {
    pub fn tier(&self) -> MembershipTier {
        MembershipTier::from_flags(self.bowl_membership, self.golden_membership)
    }
}

/// Balance served by `GET /user/stars`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsBalance {
    #[serde(default)]
    pub stars: i64,
}
