//! The default command: build options, validate, run.

use crate::cli::Cli;
use crate::config::Config;
use crate::generate::Generator;
use crate::internal;
use std::process::ExitCode;

#[must_use]
pub fn cmd_generate(cli: &Cli, config: &Config) -> ExitCode {
    let options = match cli.to_options(config).and_then(|options| {
        options.validate()?;
        Ok(options)
    }) {
        Ok(options) => options,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            internal::info("CLI", "Run 'synthlog --help' for usage");
            return ExitCode::FAILURE;
        }
    };

    match Generator::new(options).run() {
        Ok(report) => {
            internal::debug(
                "CLI",
                &format!("{} records, {} bytes", report.lines, report.bytes),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("GENERATE", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
