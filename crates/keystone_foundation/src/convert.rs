//! Total conversions from untyped values.
//!
//! Each conversion inspects the value's variant explicitly and returns an
//! [`Outcome`]; nothing is coerced implicitly and nothing panics.

use crate::error::ConversionError;
use crate::outcome::{Outcome, err, ok};
use crate::value::Value;

/// Converts a value to a number.
///
/// Integers and floats pass through. Strings are trimmed and must parse as a
/// finite decimal number, so `"12"`, `" 3.5 "` and `"1e3"` are accepted while
/// `""`, `"abc"`, `"NaN"` and `"inf"` are not. Every other type fails.
#[allow(clippy::cast_precision_loss)]
pub fn to_number(value: &Value) -> Outcome<f64> {
    match value {
        Value::Int(n) => ok(*n as f64),
        Value::Float(n) => ok(*n),
        Value::String(s) => parse_number(s),
        other => err(ConversionError::unsupported(other.value_type(), "number").to_string()),
    }
}

fn parse_number(text: &str) -> Outcome<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => ok(n),
        _ => err(ConversionError::not_numeric(text).to_string()),
    }
}

/// Converts a value to its textual rendering.
///
/// Null renders as `"null"` and undefined as `"undefined"`. Numbers render
/// with [`format_number`]. Lists and maps fail.
pub fn to_string(value: &Value) -> Outcome<String> {
    match value {
        Value::Null => ok("null".to_string()),
        Value::Undefined => ok("undefined".to_string()),
        Value::Bool(b) => ok(b.to_string()),
        Value::Int(n) => ok(n.to_string()),
        Value::Float(n) => ok(format_number(*n)),
        Value::String(s) => ok(s.to_string()),
        Value::List(_) | Value::Map(_) => {
            err(ConversionError::unsupported(value.value_type(), "string").to_string())
        }
    }
}

/// Converts a value to a boolean.
///
/// Accepts booleans, the case-insensitive strings `"true"` and `"false"`,
/// and the numbers `0` and `1`. Everything else fails.
#[allow(clippy::float_cmp)]
pub fn to_boolean(value: &Value) -> Outcome<bool> {
    match value {
        Value::Bool(b) => ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => ok(false),
        Value::String(s) => err(ConversionError::NotBooleanText {
            text: s.to_string(),
        }
        .to_string()),
        Value::Int(0) => ok(false),
        Value::Int(1) => ok(true),
        Value::Float(n) if *n == 0.0 => ok(false),
        Value::Float(n) if *n == 1.0 => ok(true),
        Value::Int(_) | Value::Float(_) => err(ConversionError::NotBooleanNumber {
            number: value.to_string(),
        }
        .to_string()),
        other => err(ConversionError::unsupported(other.value_type(), "boolean").to_string()),
    }
}

/// Renders a number the way identifiers and messages expect.
///
/// Integral values print without a fractional part (`7`, not `7.0`),
/// negative zero prints as `0`, and non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
