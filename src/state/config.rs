//! Walk configuration.

use std::path::{Path, PathBuf};

use crate::constants;

/// Root directory and extension set for one run.
///
/// The binary always uses [`StripConfig::default`], which is built from the
/// compile-time constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripConfig {
    /// Directory walked recursively.
    pub root: PathBuf,
    /// Eligible extensions, without the leading dot. Case-sensitive.
    pub extensions: Vec<String>,
}

impl StripConfig {
    #[must_use]
    pub fn new<P, I, S>(root: P, extensions: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `path` has one of the configured extensions.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new(constants::ROOT_PATH, constants::EXTENSIONS)
    }
}
