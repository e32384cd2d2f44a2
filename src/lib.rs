//! Interactive trailing-whitespace stripper.
//!
//! Walks a fixed source directory, asks the operator about each `.cpp` and
//! `.hpp` file, and rewrites approved files without trailing whitespace.

pub mod cli;
pub mod constants;
pub mod core;
pub mod logging;
pub mod state;
