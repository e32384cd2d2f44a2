//! Application-wide constants and configuration values.
//!
//! The root directory and extension set are fixed at build time. They are
//! carried into the walk through [`crate::state::StripConfig`].

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Walk Configuration ===

/// Absolute directory walked on every run.
pub const ROOT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

/// File extensions (without the leading dot) eligible for stripping.
pub const EXTENSIONS: [&str; 2] = ["cpp", "hpp"];

// === Console Messages ===

/// Per-file prompt prefix, followed by the file name.
pub const PROMPT_PREFIX: &str = "Treat file: ";
/// Per-file prompt suffix listing the accepted replies.
pub const PROMPT_SUFFIX: &str = "? [Y/n/q]: ";
/// Completion message prefix, followed by the stripped character count.
pub const MSG_STRIPPED_PREFIX: &str = "Stripped ";
/// Completion message suffix.
pub const MSG_STRIPPED_SUFFIX: &str = " characters of whitespace.";

// === Error Messages ===

pub const ERR_READ_FAILED: &str = "Failed to read";
pub const ERR_WRITE_FAILED: &str = "Failed to write";
pub const ERR_MESSAGE_WRITE_FAILED: &str = "Failed to write completion message";
pub const ERR_PROMPT_WRITE_FAILED: &str = "Failed to write prompt";
pub const ERR_INPUT_READ_FAILED: &str = "Failed to read operator input";
pub const ERR_LOGGING_INIT_FAILED: &str = "Failed to install log subscriber";
pub const ERR_INPUT_CLOSED: &str = "Standard input closed while waiting for a reply";

// === Logging ===

/// Filter used when neither `-v` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";
