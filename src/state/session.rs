//! Run outcome types.

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunOutcome {
    /// Every candidate was visited.
    #[default]
    Completed,
    /// The operator answered `q`; remaining candidates were not visited.
    Quit,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidates the operator gave a recognized reply for.
    pub prompted: usize,
    pub processed: usize,
    pub skipped: usize,
    /// Sum of the per-file stripped character counts.
    pub stripped_chars: usize,
    pub outcome: RunOutcome,
}

impl RunSummary {
    #[must_use]
    pub const fn quit(&self) -> bool {
        matches!(self.outcome, RunOutcome::Quit)
    }
}
