//! numeric literal parser
//!
//! turns `"768px"`, `"-1.5em"`, `"+2"` into a [`Length`]. the numeral is read
//! left to right: integer digits first, then after a single `.` each digit
//! adds a tenth of the previous weight. the first character that is neither
//! a digit nor that first `.` starts the unit suffix. at least one digit is
//! required.

use serde_json::Value as JsonValue;

use super::error::MediaError;
use super::types::{Length, Unit};

/// parse a textual literal with an optional sign and unit suffix
///
/// a literal without digits (`""`, `"-"`, `"."`, `"px"`) is an error.
pub fn parse_literal(input: &str) -> Result<Length, MediaError> {
    let (negative, body) = match input.chars().next() {
        Some('-') => (true, &input[1..]),
        Some('+') => (false, &input[1..]),
        _ => (false, input),
    };

    let mut magnitude = 0.0_f64;
    // weight of the last fractional digit, None while still in the integer part
    let mut weight: Option<f64> = None;
    let mut suffix_start = body.len();
    let mut seen_digit = false;

    for (i, ch) in body.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                let digit = f64::from(ch as u8 - b'0');
                match weight.as_mut() {
                    None => magnitude = magnitude * 10.0 + digit,
                    Some(w) => {
                        *w *= 10.0;
                        magnitude += digit / *w;
                    }
                }
            }
            '.' if weight.is_none() => weight = Some(1.0),
            _ => {
                suffix_start = i;
                break;
            }
        }
    }

    let suffix = &body[suffix_start..];
    let unit = Unit::parse(suffix).ok_or_else(|| MediaError::InvalidUnit {
        unit: suffix.to_string(),
        input: input.to_string(),
        suggestions: Vec::new(),
    })?;

    if !seen_digit {
        return Err(MediaError::MissingNumeral {
            input: input.to_string(),
        });
    }

    let length = unit.one().scaled(magnitude);
    Ok(if negative { length.negated() } else { length })
}

/// parse a config value that should describe a length
///
/// numbers are already numeric and come back unitless; strings go through
/// [`parse_literal`]; anything else is a type error.
pub fn parse_value(value: &JsonValue) -> Result<Length, MediaError> {
    match value {
        JsonValue::Number(n) => n
            .as_f64()
            .map(Length::unitless)
            .ok_or_else(|| MediaError::InvalidLiteral {
                found: format!("unrepresentable number {}", n),
            }),
        JsonValue::String(s) => parse_literal(s),
        other => Err(MediaError::InvalidLiteral {
            found: json_type_name(other).to_string(),
        }),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
