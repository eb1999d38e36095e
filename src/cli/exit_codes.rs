//! exit codes for mediaq commands
//!
//! these follow Unix conventions where 0 = success and non-zero = error
//! specific codes help scripts distinguish between failure types

use crate::config::ConfigError;
use crate::media::{ErrorKind, MediaError};

use super::convert::ArgumentError;

/// command completed successfully
pub const SUCCESS: i32 = 0;

/// general or unknown error
pub const ERROR: i32 = 1;

/// configuration error (unknown reference breakpoint, invalid config file)
pub const CONFIG_ERROR: i32 = 2;

/// condition has no operator and is not a media expression
pub const SYNTAX_ERROR: i32 = 3;

/// unknown unit suffix or missing unit interval
pub const UNIT_ERROR: i32 = 4;

/// value of the wrong type where a length was expected
pub const TYPE_ERROR: i32 = 5;

/// invalid command-line arguments
pub const INVALID_ARGS: i32 = 6;

/// exit code for a resolution error kind
pub fn for_kind(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Configuration => CONFIG_ERROR,
        ErrorKind::Syntax => SYNTAX_ERROR,
        ErrorKind::Unit => UNIT_ERROR,
        ErrorKind::Type => TYPE_ERROR,
    }
}

/// pick the exit code for an error by looking through its cause chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(media) = cause.downcast_ref::<MediaError>() {
            return for_kind(media.kind());
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return CONFIG_ERROR;
        }
        if cause.downcast_ref::<ArgumentError>().is_some() {
            return INVALID_ARGS;
        }
    }
    ERROR
}
