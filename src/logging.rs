//! tracing subscriber setup for the binary
//!
//! diagnostics go to stderr so stdout stays clean for queries and JSON.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// env var holding an `EnvFilter` directive, e.g. `MEDIAQ_LOG=mediaq=debug`
pub const LOG_ENV_VAR: &str = "MEDIAQ_LOG";

/// default filter for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// install the global subscriber; `MEDIAQ_LOG` wins over the `-v` count
pub fn init(verbose: u8) {
    // a subscriber may already be installed (tests, embedding)
    let _ = try_init(verbose);
}

pub fn try_init(verbose: u8) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
}
