//! Command-line front end.
//!
//! Flags mirror the `[generate]` config section; whatever is given on the
//! command line overrides the config file.

pub mod commands;

use crate::Error;
use crate::config::{Config, expand_path};
use crate::format::Format;
use crate::generate::Options;
use crate::level::Level;
use crate::sink::SinkKind;
use crate::size::{parse_duration, parse_size};
use chrono::DateTime;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub use commands::{cmd_formats, cmd_generate};

/// synthlog - generate synthetic log records.
#[derive(Debug, Parser)]
#[command(
    name = "synthlog",
    version,
    about = "Generate synthetic log records to stdout, plain files or gzip files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log format (see `synthlog formats`)
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Output path for `log` and `gz` types
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Output type: stdout, log or gz
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Number of records to generate
    #[arg(short = 'n', long)]
    pub number: Option<u64>,

    /// Byte budget instead of a record count (e.g., "10M"); wins over --number
    #[arg(short = 'b', long, value_name = "SIZE")]
    pub bytes: Option<String>,

    /// Content-time step between records (e.g., "1s")
    #[arg(short = 's', long, value_name = "DURATION")]
    pub sleep: Option<String>,

    /// Pause before each record (e.g., "250ms")
    #[arg(short = 'd', long, value_name = "DURATION")]
    pub delay: Option<String>,

    /// Rotate output every N records (or bytes with --bytes)
    #[arg(short = 'p', long, value_name = "N")]
    pub split_by: Option<String>,

    /// Truncate the output file instead of appending
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// Generate until killed
    #[arg(short = 'l', long = "loop")]
    pub forever: bool,

    /// First record timestamp for --bytes and --loop (RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub start_time: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr; repeat for more
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available formats.
    Formats,
}

impl Cli {
    /// Explicit `--config` or the default location.
    ///
    /// # Errors
    /// Unreadable or malformed config file.
    pub fn load_config(&self) -> Result<Config, Error> {
        match self.config {
            Some(ref path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Config level, made chattier by each `-v`.
    #[must_use]
    pub fn diagnostic_level(&self, config: &Config) -> Level {
        (0..self.verbose).fold(config.parse_level(), |level, _| level.more_verbose())
    }

    /// Defaults, then config, then flags.
    ///
    /// # Errors
    /// `Error::InvalidOption` for unparseable sizes, durations or times.
    pub fn to_options(&self, config: &Config) -> Result<Options, Error> {
        let mut options = config.apply(Options::default())?;

        if let Some(ref format) = self.format {
            options.format = Format::from_name(format);
        }
        if let Some(ref kind) = self.kind {
            options.kind = SinkKind::from_name(kind);
        }
        if let Some(ref output) = self.output {
            options.output = expand_path(output);
        }
        if let Some(number) = self.number {
            options.number = number;
        }
        if let Some(ref bytes) = self.bytes {
            options.bytes = parse_size(bytes)
                .ok_or_else(|| Error::InvalidOption(format!("--bytes: invalid size '{bytes}'")))?;
        }
        if let Some(ref split_by) = self.split_by {
            options.split_by = parse_size(split_by).ok_or_else(|| {
                Error::InvalidOption(format!("--split-by: invalid value '{split_by}'"))
            })?;
        }
        if let Some(ref sleep) = self.sleep {
            options.sleep = parse_duration(sleep).ok_or_else(|| {
                Error::InvalidOption(format!("--sleep: invalid duration '{sleep}'"))
            })?;
        }
        if let Some(ref delay) = self.delay {
            options.delay = parse_duration(delay).ok_or_else(|| {
                Error::InvalidOption(format!("--delay: invalid duration '{delay}'"))
            })?;
        }
        if self.overwrite {
            options.overwrite = true;
        }
        if self.forever {
            options.forever = true;
        }
        if let Some(ref start) = self.start_time {
            options.start_time = DateTime::parse_from_rfc3339(start).map_err(|e| {
                Error::InvalidOption(format!("--start-time: '{start}': {e}"))
            })?;
        }

        Ok(options)
    }
}
