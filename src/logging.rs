//! Diagnostic logging to stderr.
//!
//! Stdout is reserved for the prompts and completion messages, so every log
//! line goes to stderr.

use std::io::{self, IsTerminal};

use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Filter directive for a `-v` count.
#[must_use]
pub fn filter_for_verbosity(verbose: u8) -> String {
    match verbose {
        0 => constants::DEFAULT_LOG_FILTER.to_string(),
        1 => format!("{}=info", constants::APP_NAME),
        _ => format!("{}=debug", constants::APP_NAME),
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()
        .wrap_err(constants::ERR_LOGGING_INIT_FAILED)
}
