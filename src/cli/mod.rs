mod commands;
mod convert;
pub mod exit_codes;
pub mod output;

pub use commands::{Cli, Commands, ConfigCommands};
pub use convert::ArgumentError;

use anyhow::Result;

use crate::config::ConfigError;
use crate::media::MediaError;

use output::{JsonRpcError, OutputMode};

pub fn run(cli: Cli) -> Result<()> {
    commands::execute(cli)
}

/// print `err` the way the output mode asks for and return the exit code
pub fn report_error(err: &anyhow::Error, output_mode: OutputMode) -> i32 {
    let code = exit_codes::for_error(err);

    if output_mode.is_json() {
        let mut error = JsonRpcError::new(code, format!("{:#}", err));
        for cause in err.chain() {
            if let Some(media) = cause.downcast_ref::<MediaError>() {
                error = error.with_kind(media.kind(), media.suggestions());
                break;
            }
            if let Some(ConfigError::Invalid(problems)) = cause.downcast_ref::<ConfigError>() {
                error = error.with_details(problems.clone());
                break;
            }
        }
        output::print_json_error(&error);
    } else {
        eprintln!("error: {:#}", err);
    }

    code
}
