//! evaluation context shared by the compiler, evaluator and composer

use tracing::warn;

use super::compiler::compile;
use super::error::MediaError;
use super::resolver::parse_expression;
use super::tables::{Tables, UnitIntervals};
use super::types::ParsedExpression;

/// what to do when a condition cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// abort with the error
    #[default]
    Strict,
    /// log a warning and carry on without the condition
    Lenient,
}

impl Strictness {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }

    /// apply the policy to a resolution result
    ///
    /// strict passes errors through; lenient logs them and yields `None`.
    pub fn recover<T>(self, result: Result<T, MediaError>) -> Result<Option<T>, MediaError> {
        match (self, result) {
            (_, Ok(value)) => Ok(Some(value)),
            (Strictness::Strict, Err(err)) => Err(err),
            (Strictness::Lenient, Err(err)) => {
                warn!(kind = err.kind().as_str(), "{}", err);
                Ok(None)
            }
        }
    }
}

/// settings for deciding visibility without media query support
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFallback {
    /// breakpoint treated as the current viewport
    pub breakpoint: String,
    /// static expressions that count as matching
    pub expressions: Vec<String>,
}

impl StaticFallback {
    pub fn new(breakpoint: impl Into<String>, expressions: Vec<String>) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            expressions,
        }
    }

    pub fn allows(&self, expression: &str) -> bool {
        self.expressions.iter().any(|e| e == expression)
    }
}

impl Default for StaticFallback {
    fn default() -> Self {
        Self::new(
            "desktop",
            vec![
                "screen".to_string(),
                "portrait".to_string(),
                "landscape".to_string(),
            ],
        )
    }
}

/// everything a condition is resolved against
#[derive(Debug, Clone, Copy)]
pub struct MediaContext<'a> {
    /// active breakpoint and expression tables
    pub tables: &'a Tables,
    /// unit intervals for strict bounds
    pub intervals: &'a UnitIntervals,
    /// reference breakpoint and allow-list for static mode
    pub fallback: &'a StaticFallback,
    /// whether the target can evaluate media queries at all
    pub media_support: bool,
    pub strictness: Strictness,
}

impl<'a> MediaContext<'a> {
    pub fn new(
        tables: &'a Tables,
        intervals: &'a UnitIntervals,
        fallback: &'a StaticFallback,
    ) -> Self {
        Self {
            tables,
            intervals,
            fallback,
            media_support: true,
            strictness: Strictness::Strict,
        }
    }

    pub fn with_media_support(mut self, media_support: bool) -> Self {
        self.media_support = media_support;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn compile(&self, condition: &str) -> Result<String, MediaError> {
        compile(condition, self.tables, self.intervals)
    }

    pub fn parse(&self, condition: &str) -> Result<ParsedExpression, MediaError> {
        parse_expression(condition, self.tables, self.intervals)
    }
}
