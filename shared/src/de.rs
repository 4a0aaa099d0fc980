//! Deserialization helpers for loosely-typed API fields
//!
//! The backend serves prices as numbers or numeric strings ("120",
//! "₹120.00") and membership flags as 1/"1"/true/"true" interchangeably.
//! These helpers normalize both at the serde boundary so everything past
//! the models only ever sees `f64` and `bool`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Num(f64),
    Text(String),
}

/// Accepts a number, a numeric string (currency symbols and separators
/// stripped), or null/absent. Unparseable values become 0.0.
pub fn flexible_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPrice::Num(n)) if n.is_finite() => n,
        Some(RawPrice::Text(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.trim().parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Accepts true, 1, "1" or "true" as set; everything else (including
/// null/absent) is unset.
pub fn flexible_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Int(n)) => n == 1,
        Some(RawFlag::Text(s)) => s == "1" || s == "true",
        None => false,
    })
}
