//! Lenient numeric coercion for form-style payloads.
//!
//! Browsers submit numbers either as JSON numbers or as strings. Both are
//! accepted; an empty string counts as zero. Anything else is `None`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Coerce to a finite `f64`.
pub fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Coerce to an exact decimal.
pub fn decimal(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(Decimal::ZERO)
            } else {
                parse_decimal(trimmed)
            }
        }
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
