//! conversion helpers for CLI arguments

use thiserror::Error;

use crate::media::{parse_literal, Breakpoints, MediaError, MediaExpressions};

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("expected NAME=VALUE, got `{0}`")]
    MissingEquals(String),

    #[error("empty name in `{0}`")]
    EmptyName(String),

    #[error("empty media expression in `{0}`")]
    EmptyExpression(String),

    #[error("invalid breakpoint value in `{input}`: {source}")]
    InvalidBreakpoint {
        input: String,
        #[source]
        source: MediaError,
    },
}

/// convert static/dynamic flags to Option<bool> (media support override)
pub fn resolve_support_flags(static_mode: bool, dynamic_mode: bool) -> Option<bool> {
    if static_mode {
        Some(false)
    } else if dynamic_mode {
        Some(true)
    } else {
        None
    }
}

fn split_pair(raw: &str) -> Result<(&str, &str), ArgumentError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| ArgumentError::MissingEquals(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ArgumentError::EmptyName(raw.to_string()));
    }
    Ok((name, value.trim()))
}

/// parse `-b NAME=VALUE` pairs into a breakpoint override table
pub fn parse_breakpoints(pairs: &[String]) -> Result<Breakpoints, ArgumentError> {
    let mut breakpoints = Breakpoints::new();
    for raw in pairs {
        let (name, value) = split_pair(raw)?;
        let length = parse_literal(value).map_err(|source| ArgumentError::InvalidBreakpoint {
            input: raw.clone(),
            source,
        })?;
        breakpoints.insert(name.to_string(), length);
    }
    Ok(breakpoints)
}

/// parse `-e NAME=VALUE` pairs into a media expression override table
pub fn parse_expressions(pairs: &[String]) -> Result<MediaExpressions, ArgumentError> {
    let mut expressions = MediaExpressions::new();
    for raw in pairs {
        let (name, value) = split_pair(raw)?;
        if value.is_empty() {
            return Err(ArgumentError::EmptyExpression(raw.clone()));
        }
        expressions.insert(name.to_string(), value.to_string());
    }
    Ok(expressions)
}
