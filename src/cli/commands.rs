//! The interactive stripping run.

use std::io::{BufRead, Write};

use color_eyre::eyre::{Result, WrapErr};

use crate::cli::prompt::prompt;
use crate::constants;
use crate::core::{discover, strip_file};
use crate::state::{Decision, RunOutcome, RunSummary, StripConfig};

/// Walk `config.root`, prompt for every candidate, and strip approved files.
///
/// Candidates are handled one at a time: each is prompted and, if approved,
/// rewritten before the walk moves on. A `q` reply stops the walk at once.
///
/// # Errors
///
/// Any I/O failure aborts the run, including stdin closing mid-prompt.
pub fn run<R, W>(config: &StripConfig, input: &mut R, output: &mut W) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();

    for candidate in discover(config) {
        let decision = prompt(&candidate, input, output)?;
        summary.prompted += 1;

        match decision {
            Decision::Process => {
                let report = strip_file(&candidate.path())?;
                writeln!(output, "{}", report.message())
                    .wrap_err(constants::ERR_MESSAGE_WRITE_FAILED)?;
                summary.processed += 1;
                summary.stripped_chars += report.stripped_chars;
            }
            Decision::Skip => {
                summary.skipped += 1;
            }
            Decision::Quit => {
                summary.outcome = RunOutcome::Quit;
                break;
            }
        }
    }

    tracing::info!(
        root = %config.root.display(),
        prompted = summary.prompted,
        processed = summary.processed,
        skipped = summary.skipped,
        stripped = summary.stripped_chars,
        quit = summary.quit(),
        "run finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    fn config_for(root: &Path) -> StripConfig {
        StripConfig::new(root, ["cpp", "hpp"])
    }

    fn run_with(root: &Path, replies: &str) -> (Result<RunSummary>, String) {
        let mut input = Cursor::new(replies.as_bytes());
        let mut output = Vec::new();
        let result = run(&config_for(root), &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_process_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, "foo  \nbar\n").unwrap();

        let (result, shown) = run_with(dir.path(), "y\n");
        let summary = result.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "foo\nbar\n");
        assert_eq!(
            shown,
            "Treat file: a.cpp? [Y/n/q]: Stripped 2 characters of whitespace.\n"
        );
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.stripped_chars, 2);
        assert_eq!(summary.outcome, RunOutcome::Completed);
    }

    #[test]
    fn test_other_extensions_never_prompted() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("b.txt");
        let hpp = dir.path().join("c.hpp");
        fs::write(&txt, "keep  \t\n").unwrap();
        fs::write(&hpp, "int x;\t\t\n").unwrap();

        let (result, shown) = run_with(dir.path(), "\n");
        let summary = result.unwrap();

        assert!(!shown.contains("b.txt"));
        assert_eq!(shown.matches("Treat file:").count(), 1);
        assert!(shown.contains("Treat file: c.hpp?"));
        assert_eq!(fs::read_to_string(&txt).unwrap(), "keep  \t\n");
        assert_eq!(fs::read_to_string(&hpp).unwrap(), "int x;\n");
        assert_eq!(summary.prompted, 1);
    }

    #[test]
    fn test_skip_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cpp");
        let b = dir.path().join("b.cpp");
        fs::write(&a, "a  \n").unwrap();
        fs::write(&b, "b  \n").unwrap();

        let (result, shown) = run_with(dir.path(), "n\ny\n");
        let summary = result.unwrap();

        assert_eq!(fs::read_to_string(&a).unwrap(), "a  \n");
        assert_eq!(fs::read_to_string(&b).unwrap(), "b\n");
        assert_eq!(shown.matches("Treat file: a.cpp?").count(), 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn test_quit_leaves_later_candidates_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let files = ["a.cpp", "b.cpp", "c.cpp", "d.hpp"];
        for name in files {
            fs::write(dir.path().join(name), "x \n").unwrap();
        }

        let (result, shown) = run_with(dir.path(), "y\nq\ny\ny\n");
        let summary = result.unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.cpp")).unwrap(), "x\n");
        for name in &files[1..] {
            assert_eq!(fs::read_to_string(dir.path().join(name)).unwrap(), "x \n");
        }
        assert!(!shown.contains("c.cpp"));
        assert!(summary.quit());
        assert_eq!(summary.prompted, 2);
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn test_invalid_reply_reprompts_same_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.cpp"), "a\t\n").unwrap();

        let (result, shown) = run_with(dir.path(), "what\nY\n");
        let summary = result.unwrap();

        assert_eq!(shown.matches("Treat file: a.cpp?").count(), 2);
        assert_eq!(summary.prompted, 1);
        assert_eq!(summary.stripped_chars, 1);
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, "one \n two\t\n").unwrap();

        run_with(dir.path(), "y\n").0.unwrap();
        let first = fs::read_to_string(&path).unwrap();
        let (result, shown) = run_with(dir.path(), "y\n");

        assert_eq!(result.unwrap().stripped_chars, 0);
        assert!(shown.contains("Stripped 0 characters of whitespace."));
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_empty_tree_completes_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let (result, shown) = run_with(dir.path(), "");
        let summary = result.unwrap();
        assert!(shown.is_empty());
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn test_closed_input_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.cpp"), "a \n").unwrap();
        let (result, _) = run_with(dir.path(), "");
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(dir.path().join("a.cpp")).unwrap(), "a \n");
    }

    #[test]
    fn test_non_utf8_file_does_not_stop_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.cpp"), b"// caf\xe9  \n").unwrap();
        fs::write(dir.path().join("b.cpp"), "b \n").unwrap();

        let (result, shown) = run_with(dir.path(), "y\ny\n");
        let summary = result.unwrap();

        assert_eq!(fs::read(dir.path().join("a.cpp")).unwrap(), b"// caf\xe9\n");
        assert_eq!(fs::read_to_string(dir.path().join("b.cpp")).unwrap(), "b\n");
        assert!(shown.contains("Treat file: b.cpp?"));
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.stripped_chars, 3);
    }

    #[test]
    fn test_crlf_file_counts_carriage_returns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinmesh.hpp");
        fs::write(&path, "foo \r\nbar\r\n").unwrap();

        let (result, shown) = run_with(dir.path(), "y\n");

        assert_eq!(result.unwrap().stripped_chars, 3);
        assert!(shown.ends_with("Stripped 3 characters of whitespace.\n"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "foo\nbar\n");
    }
}
