//! static interception evaluator
//!
//! when the target cannot evaluate media queries, one breakpoint stands in
//! for the viewport and each condition list is decided up front: either its
//! content is emitted unconditionally or not at all.

use std::cmp::Ordering;

use tracing::debug;

use super::context::MediaContext;
use super::error::MediaError;
use super::types::{Length, Prefix};

/// decide whether `conditions` hold at the static reference breakpoint
///
/// every condition must pass (AND), and the first failure short-circuits:
/// - static expressions pass only when they are on the fallback allow-list
/// - `max` conditions pass only when `value <= reference`
/// - `min` conditions pass only when `value > reference`
///
/// values whose units cannot be compared with the reference do not pass.
/// an unknown reference breakpoint is an error regardless of strictness.
pub fn intercepts_static_breakpoint<S: AsRef<str>>(
    conditions: &[S],
    ctx: &MediaContext<'_>,
) -> Result<bool, MediaError> {
    let name = &ctx.fallback.breakpoint;
    let reference = ctx
        .tables
        .breakpoint(name)
        .ok_or_else(|| MediaError::UnknownBreakpoint {
            name: name.clone(),
            suggestions: ctx.tables.similar_breakpoints(name),
        })?;

    for condition in conditions {
        let condition = condition.as_ref();
        if !condition_passes(condition, reference, ctx)? {
            debug!(condition, reference = %reference, "condition rejected statically");
            return Ok(false);
        }
    }

    Ok(true)
}

fn condition_passes(
    condition: &str,
    reference: Length,
    ctx: &MediaContext<'_>,
) -> Result<bool, MediaError> {
    if ctx.tables.is_expression(condition) {
        return Ok(ctx.fallback.allows(condition));
    }

    let Some(parsed) = ctx.strictness.recover(ctx.parse(condition))? else {
        return Ok(false);
    };

    let ordering = parsed.value.compare(&reference);
    if ordering.is_none() {
        debug!(
            condition,
            value = %parsed.value,
            reference = %reference,
            "units are not comparable"
        );
    }

    Ok(matches!(
        (parsed.prefix, ordering),
        (Prefix::Max, Some(Ordering::Less | Ordering::Equal))
            | (Prefix::Min, Some(Ordering::Greater))
    ))
}
