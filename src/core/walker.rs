//! Candidate discovery under the configured root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::state::StripConfig;

/// A regular file whose extension is in the configured set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Directory containing the file.
    pub dir: PathBuf,
    /// File name within `dir`.
    pub name: String,
}

impl Candidate {
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Lazily walk `config.root` and yield matching regular files.
///
/// Entries are visited depth first, sorted by file name within each
/// directory. Symlinks are not followed. Unreadable entries, including a
/// missing root, are logged and skipped.
pub fn discover(config: &StripConfig) -> impl Iterator<Item = Candidate> + '_ {
    WalkDir::new(&config.root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| config.matches(entry.path()))
        .filter_map(|entry| to_candidate(entry.path()))
        .inspect(|candidate| tracing::debug!(path = %candidate.path().display(), "candidate"))
}

fn to_candidate(path: &Path) -> Option<Candidate> {
    let dir = path.parent()?.to_path_buf();
    let name = path.file_name()?.to_string_lossy().into_owned();
    Some(Candidate { dir, name })
}
