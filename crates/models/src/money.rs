//! Currency columns are `DECIMAL(10, 2)`; on the wire they are strings with
//! exactly two fractional digits (`"300.00"`). Inputs accept JSON numbers or
//! strings.
//!
//! Use with `#[serde(with = "crate::money")]`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serializer};

/// Render `value` with exactly two decimals, rounding half away from zero.
pub fn format(value: &Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer)
}
