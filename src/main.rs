use std::io;

use clap::Parser;
use color_eyre::Result;

use wstrip::cli::args::Args;
use wstrip::cli::commands;
use wstrip::constants;
use wstrip::logging;
use wstrip::state::StripConfig;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = StripConfig::default();
    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        root = %config.root.display(),
        extensions = ?config.extensions,
        "starting"
    );

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    commands::run(&config, &mut input, &mut output)?;
    Ok(())
}
