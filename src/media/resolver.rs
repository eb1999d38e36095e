//! expression tokenizer and resolver
//!
//! a dynamic condition looks like `<dimension?><operator><value>`:
//! `>phone`, `height<=40em`, `≥tablet`. resolution runs operator ->
//! dimension -> prefix -> value, and turns strict bounds into inclusive ones
//! by stepping one unit interval.

use tracing::debug;

use super::error::MediaError;
use super::literal::parse_literal;
use super::tables::{Tables, UnitIntervals};
use super::types::{Length, Operator, ParsedExpression, Prefix, DEFAULT_DIMENSION};

/// find the first operator candidate contained in `expression`
pub fn detect_operator(expression: &str) -> Result<Operator, MediaError> {
    Operator::CANDIDATES
        .into_iter()
        .find(|op| expression.contains(op.as_str()))
        .ok_or_else(|| MediaError::MissingOperator {
            condition: expression.to_string(),
        })
}

/// text before the operator, or `width` when there is none
pub fn detect_dimension(expression: &str, operator: Operator) -> &str {
    let (before, _) = split_at_operator(expression, operator);
    if before.is_empty() {
        DEFAULT_DIMENSION
    } else {
        before
    }
}

pub fn detect_prefix(operator: Operator) -> Prefix {
    operator.prefix()
}

/// resolve the value after the operator
///
/// breakpoint names take precedence over literals. strict operators move the
/// value by the unit's interval: `>` adds it, `<` subtracts it.
pub fn resolve_value(
    expression: &str,
    operator: Operator,
    tables: &Tables,
    intervals: &UnitIntervals,
) -> Result<Length, MediaError> {
    let (_, token) = split_at_operator(expression, operator);

    let value = match tables.breakpoint(token) {
        Some(length) => length,
        None => parse_literal(token).map_err(|err| match err {
            MediaError::InvalidUnit { .. } => {
                let similar = tables.similar_breakpoints(token);
                err.with_suggestions(similar)
            }
            other => other,
        })?,
    };

    let Some(direction) = operator.exclusive_direction() else {
        return Ok(value);
    };

    let interval = intervals
        .get(&value.unit)
        .copied()
        .ok_or_else(|| MediaError::MissingInterval {
            unit: value.unit,
            input: expression.to_string(),
        })?;

    Ok(value.offset(direction * interval))
}

/// resolve a dynamic condition into its parts
pub fn parse_expression(
    expression: &str,
    tables: &Tables,
    intervals: &UnitIntervals,
) -> Result<ParsedExpression, MediaError> {
    let operator = detect_operator(expression)?;
    let dimension = detect_dimension(expression, operator);
    let prefix = detect_prefix(operator);
    let value = resolve_value(expression, operator, tables, intervals)?;

    debug!(
        expression,
        %operator,
        dimension,
        %prefix,
        %value,
        "resolved expression"
    );

    Ok(ParsedExpression::new(dimension, prefix, value))
}

/// split around the first occurrence of the operator, trimming both sides
fn split_at_operator(expression: &str, operator: Operator) -> (&str, &str) {
    let token = operator.as_str();
    match expression.find(token) {
        Some(at) => (
            expression[..at].trim(),
            expression[at + token.len()..].trim(),
        ),
        None => ("", expression.trim()),
    }
}
