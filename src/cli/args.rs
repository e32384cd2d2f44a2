//! Command-line argument definitions.

use clap::{ArgAction, Parser};

/// wstrip - interactively strip trailing whitespace from C++ sources
///
/// Walks a fixed source directory and asks, file by file, whether to rewrite
/// each `.cpp`/`.hpp` file without trailing whitespace.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["wstrip"]).unwrap();
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_verbose_is_counted() {
        let args = Args::try_parse_from(["wstrip", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_rejects_positional_root() {
        assert!(Args::try_parse_from(["wstrip", "/some/dir"]).is_err());
    }
}
