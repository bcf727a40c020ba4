use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Interprets a raw JSON value as a monetary amount.
///
/// The backend stores whatever the browser submitted, so amounts arrive as
/// numbers, numeric strings ("5000" straight from a form input), or garbage.
/// Anything that does not parse yields `None` instead of failing the whole
/// payload.
pub fn decimal_from_value(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64_retain)),
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

// Lenient deserializer for Option<Decimal> fields crossing the backend
// boundary. Serialization stays on the default serde-float path.
pub mod lenient_decimal {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(decimal_from_value(&value))
    }
}
