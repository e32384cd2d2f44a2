//! Command-line interface module.
//!
//! Provides argument parsing, the per-file prompt and the run loop.

pub mod args;
pub mod commands;
pub mod prompt;
