//! Usage:
//!   synthlog [options]        Generate records (see --help)
//!   synthlog formats          List available formats

use clap::Parser;
use std::process::ExitCode;
use synthlog::cli::{Cli, Command, cmd_formats, cmd_generate};
use synthlog::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config decides the diagnostic level, so it loads before the logger exists.
    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init(cli.diagnostic_level(&config));

    match cli.command {
        Some(Command::Formats) => cmd_formats(),
        None => cmd_generate(&cli, &config),
    }
}
