//! Trailing whitespace removal.
//!
//! Files are handled as raw bytes, so sources in any ASCII-compatible
//! encoding are rewritten without being decoded.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::constants;

/// Result of stripping one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripReport {
    /// Number of lines written back.
    pub lines: usize,
    /// Trailing whitespace bytes removed, the `\n` terminator excluded.
    pub stripped_chars: usize,
}

impl StripReport {
    /// Completion line printed after a file is rewritten.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "{}{}{}",
            constants::MSG_STRIPPED_PREFIX,
            self.stripped_chars,
            constants::MSG_STRIPPED_SUFFIX
        )
    }
}

/// Space, `\t`, `\n`, `\v`, `\f` and `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
const fn is_trailing_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Strip trailing whitespace from every line of `content`.
///
/// A line ends at `\n`. A `\r` before it is whitespace and is stripped and
/// counted like any other. Every output line is terminated by exactly one
/// `\n`, including a final line that had no terminator.
#[must_use]
pub fn strip_bytes(content: &[u8]) -> (Vec<u8>, StripReport) {
    let mut out = Vec::with_capacity(content.len());
    let mut report = StripReport::default();

    for raw in content.split_inclusive(|&b| b == b'\n') {
        let line = raw.strip_suffix(b"\n").unwrap_or(raw);
        let kept = line
            .iter()
            .rposition(|&b| !is_trailing_whitespace(b))
            .map_or(0, |last| last + 1);

        report.stripped_chars += line.len() - kept;
        report.lines += 1;

        out.extend_from_slice(&line[..kept]);
        out.push(b'\n');
    }

    (out, report)
}

/// Read `path`, strip trailing whitespace, and overwrite it in place.
///
/// The whole file is read before it is truncated. There is no backup and
/// the write is not atomic.
///
/// # Errors
///
/// Fails if the file cannot be read or written.
pub fn strip_file(path: &Path) -> Result<StripReport> {
    let original = fs::read(path)
        .wrap_err_with(|| format!("{} {}", constants::ERR_READ_FAILED, path.display()))?;

    let (stripped, report) = strip_bytes(&original);

    fs::write(path, stripped)
        .wrap_err_with(|| format!("{} {}", constants::ERR_WRITE_FAILED, path.display()))?;

    tracing::info!(
        path = %path.display(),
        lines = report.lines,
        stripped = report.stripped_chars,
        "stripped file"
    );
    Ok(report)
}
