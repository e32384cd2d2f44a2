//! Operator replies to the per-file prompt.

/// Parsed reply to `Treat file: <name>? [Y/n/q]: `.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Strip the file (empty reply, `y` or `Y`).
    Process,
    /// Leave the file alone and move on (`n` or `N`).
    Skip,
    /// Stop the whole run (`q`).
    Quit,
    /// Anything else; the prompt is shown again.
    Invalid,
}

impl Response {
    /// Parse a reply with its line terminator already removed.
    ///
    /// No other trimming is applied, so `" y"` is `Invalid`.
    #[must_use]
    pub fn parse(reply: &str) -> Self {
        match reply {
            "" | "y" | "Y" => Self::Process,
            "n" | "N" => Self::Skip,
            "q" => Self::Quit,
            _ => Self::Invalid,
        }
    }

    /// The decision this reply stands for, or `None` for `Invalid`.
    #[must_use]
    pub const fn decision(self) -> Option<Decision> {
        match self {
            Self::Process => Some(Decision::Process),
            Self::Skip => Some(Decision::Skip),
            Self::Quit => Some(Decision::Quit),
            Self::Invalid => None,
        }
    }
}

/// A recognized reply: what to do with the current candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Process,
    Skip,
    Quit,
}
