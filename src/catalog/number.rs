//! Serde helpers for JSON numbers that must be whole.
//!
//! JSON does not distinguish `2` from `2.0`; clients that serialize every
//! number as a float still address integer columns correctly.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Accept any JSON number with no fractional part that fits in an `i64`.
pub(crate) fn whole<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    to_whole(&number)
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, got {number}")))
}

/// [`whole`] for optional fields. Pair with `#[serde(default)]`.
pub(crate) fn optional_whole<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Number>::deserialize(deserializer)?
        .map(|number| {
            to_whole(&number)
                .ok_or_else(|| D::Error::custom(format!("expected a whole number, got {number}")))
        })
        .transpose()
}

fn to_whole(number: &Number) -> Option<i64> {
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}
