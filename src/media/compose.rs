//! query composer
//!
//! folds a condition list into one compound media query. nesting `@media`
//! blocks is a conjunction, so the fold joins clauses with `and`; a clause
//! that is itself an OR list (`a, b`) distributes over the rest.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::context::MediaContext;
use super::error::MediaError;
use super::intercept::intercepts_static_breakpoint;

/// a conjunction of compiled clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaQuery {
    clauses: Vec<String>,
}

impl MediaQuery {
    pub fn new(clauses: Vec<String>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// the query as a flat list of OR-ed alternatives
    ///
    /// `["screen", "(a), (b)"]` becomes `["screen and (a)", "screen and (b)"]`
    ///
    /// a blank clause constrains nothing and is skipped.
    pub fn alternatives(&self) -> Vec<String> {
        let mut acc: Option<Vec<String>> = None;
        for clause in &self.clauses {
            let options = split_alternatives(clause);
            if options.is_empty() {
                continue;
            }
            acc = Some(match acc {
                None => options.into_iter().map(str::to_string).collect(),
                Some(prefixes) => prefixes
                    .iter()
                    .flat_map(|prefix| {
                        options
                            .iter()
                            .map(move |option| format!("{} and {}", prefix, option))
                    })
                    .collect(),
            });
        }
        acc.unwrap_or_default()
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alternatives().join(", "))
    }
}

/// outcome of composing a condition list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// content applies with no wrapper
    Unconditional,
    /// content is dropped (static mode rejected the conditions)
    Suppressed,
    /// content applies inside this media query
    Query(MediaQuery),
}

impl Media {
    /// whether the content ends up in the output at all
    pub fn applies(&self) -> bool {
        !matches!(self, Media::Suppressed)
    }

    pub fn query(&self) -> Option<&MediaQuery> {
        match self {
            Media::Query(query) => Some(query),
            _ => None,
        }
    }

    /// wrap `content` the way the nested blocks would
    pub fn render(&self, content: &str) -> Option<String> {
        match self {
            Media::Unconditional => Some(content.to_string()),
            Media::Suppressed => None,
            Media::Query(query) => Some(format!("@media {} {{\n  {}\n}}", query, content)),
        }
    }
}

/// compose `conditions` into a [`Media`] decision
///
/// with media support, each condition is compiled and the clauses are
/// AND-ed; an empty list needs no wrapper. without media support, the static
/// evaluator decides whether the content is kept.
pub fn media<S: AsRef<str>>(conditions: &[S], ctx: &MediaContext<'_>) -> Result<Media, MediaError> {
    if !ctx.media_support {
        let intercepted = intercepts_static_breakpoint(conditions, ctx)?;
        return Ok(if intercepted {
            Media::Unconditional
        } else {
            Media::Suppressed
        });
    }

    let mut clauses = Vec::with_capacity(conditions.len());
    for condition in conditions {
        let Some(clause) = ctx.strictness.recover(ctx.compile(condition.as_ref()))? else {
            continue;
        };
        if clause.trim().is_empty() {
            debug!(condition = condition.as_ref(), "skipping blank media expression");
            continue;
        }
        clauses.push(clause);
    }

    if clauses.is_empty() {
        return Ok(Media::Unconditional);
    }

    let query = MediaQuery::new(clauses);
    debug!(query = %query, "composed media query");
    Ok(Media::Query(query))
}

/// split a clause on commas outside parentheses
fn split_alternatives(clause: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in clause.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(clause[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(clause[start..].trim());

    parts.retain(|part| !part.is_empty());
    parts
}
