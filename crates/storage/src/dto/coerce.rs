//! Lenient number parsing for request bodies.
//!
//! Clients send counters as JSON numbers, numeric strings, `null`, or leave
//! them out entirely. These helpers turn all of that into typed values
//! without rejecting the request: unusable input becomes zero on create and
//! "no change" on update.

use std::str::FromStr;

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn to_count(decimal: Decimal) -> Option<i32> {
    decimal
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
}

/// Parses a decimal from free-form text such as `"135"`, `" 2.5 "` or `"1e2"`.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    Decimal::from_str(raw)
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(Decimal::from_f64))
}

/// Parses a whole-number counter, rounding fractional input.
pub fn parse_count(raw: &str) -> Option<i32> {
    parse_decimal(raw).and_then(to_count)
}

/// Parses a record id. Only plain integers are accepted; `"4.2"` or `"1e2"`
/// never match a row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn count_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_decimal(&value).and_then(to_count).unwrap_or(0))
}

pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_decimal(&value).unwrap_or(Decimal::ZERO))
}

pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_decimal(&value).and_then(to_count))
}

pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_decimal(&value))
}

/// Reads a text column. Scalars are stored as their textual form and
/// `null` stays absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_id(&s),
        _ => None,
    })
}
