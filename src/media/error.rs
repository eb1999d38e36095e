//! media expression error types

use thiserror::Error;

use super::types::Unit;

/// broad failure classes, used for exit codes and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// the configuration references something it does not define
    Configuration,
    /// a dynamic condition without a comparison operator
    Syntax,
    /// an unknown unit, or a unit with no interval where one is needed
    Unit,
    /// a literal that is neither a number nor a string
    Type,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Unit => "unit",
            ErrorKind::Type => "type",
        }
    }
}

/// error raised while resolving or compiling a condition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("`{name}` is not a valid breakpoint{}", did_you_mean(.suggestions))]
    UnknownBreakpoint {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("no valid operator found in `{condition}`")]
    MissingOperator { condition: String },

    #[error("invalid unit `{unit}` in `{input}`{}", did_you_mean(.suggestions))]
    InvalidUnit {
        unit: String,
        input: String,
        suggestions: Vec<String>,
    },

    #[error("missing number in `{input}`")]
    MissingNumeral { input: String },

    #[error("no unit interval defined for {} (needed by `{input}`)", Unit::describe(.unit))]
    MissingInterval { unit: Unit, input: String },

    #[error("value for a length should be a number or a string, got {found}")]
    InvalidLiteral { found: String },
}

impl MediaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::UnknownBreakpoint { .. } => ErrorKind::Configuration,
            MediaError::MissingOperator { .. } => ErrorKind::Syntax,
            MediaError::InvalidUnit { .. }
            | MediaError::MissingNumeral { .. }
            | MediaError::MissingInterval { .. } => ErrorKind::Unit,
            MediaError::InvalidLiteral { .. } => ErrorKind::Type,
        }
    }

    /// names the user may have meant, if any
    pub fn suggestions(&self) -> &[String] {
        match self {
            MediaError::UnknownBreakpoint { suggestions, .. }
            | MediaError::InvalidUnit { suggestions, .. } => suggestions.as_slice(),
            _ => &[],
        }
    }

    /// attach suggestions to variants that carry them
    pub fn with_suggestions(mut self, names: Vec<String>) -> Self {
        match &mut self {
            MediaError::UnknownBreakpoint { suggestions, .. }
            | MediaError::InvalidUnit { suggestions, .. } => *suggestions = names,
            _ => {}
        }
        self
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("`{}`", s)).collect();
    format!(" (did you mean {}?)", quoted.join(" or "))
}
