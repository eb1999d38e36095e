//! compiles a single condition into one media query clause

use super::error::MediaError;
use super::resolver::parse_expression;
use super::tables::{Tables, UnitIntervals};

/// compile one condition into a clause
///
/// static expression names return their literal unchanged (which may be a
/// comma-separated OR list); anything else is resolved and printed as
/// `(prefix-dimension: value)`.
pub fn compile(
    condition: &str,
    tables: &Tables,
    intervals: &UnitIntervals,
) -> Result<String, MediaError> {
    if let Some(literal) = tables.expression(condition) {
        return Ok(literal.to_string());
    }

    parse_expression(condition, tables, intervals).map(|parsed| parsed.to_string())
}
