//! File discovery and rewriting.

pub mod stripper;
pub mod walker;

pub use stripper::{strip_bytes, strip_file, StripReport};
pub use walker::{discover, Candidate};
