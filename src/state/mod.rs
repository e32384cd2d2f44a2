//! Plain data types shared by the walk, the prompt and the run loop.

mod config;
mod response;
mod session;

pub use config::StripConfig;
pub use response::{Decision, Response};
pub use session::{RunOutcome, RunSummary};
