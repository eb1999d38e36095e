//! media query translation
//!
//! turns conditions like `>phone`, `<=tablet`, `height>=40em` or `retina2x`
//! into CSS media query clauses, folds condition lists into one query, and
//! decides statically whether a list applies when the target has no media
//! query support.

pub mod compiler;
pub mod compose;
pub mod context;
pub mod engine;
pub mod error;
pub mod intercept;
pub mod literal;
pub mod resolver;
pub mod scope;
pub mod tables;
pub mod types;

pub use compiler::compile;
pub use compose::{media, Media, MediaQuery};
pub use context::{MediaContext, StaticFallback, Strictness};
pub use engine::Engine;
pub use error::{ErrorKind, MediaError};
pub use intercept::intercepts_static_breakpoint;
pub use literal::{parse_literal, parse_value};
pub use resolver::{detect_dimension, detect_operator, detect_prefix, parse_expression, resolve_value};
pub use scope::{Scope, ScopeGuard};
pub use tables::{Breakpoints, MediaExpressions, Tables, UnitIntervals};
pub use types::{Length, Operator, ParsedExpression, Prefix, Unit};
