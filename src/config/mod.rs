//! TOML configuration: diagnostic level and generation defaults.
//!
//! A missing file is not an error; every field has a default so zero-config
//! works out of the box. Values here are defaults only, CLI flags win.

mod structs;

pub use structs::{GenerateConfig, GeneralConfig};

use crate::Error;
use crate::format::Format;
use crate::generate::Options;
use crate::internal;
use crate::level::Level;
use crate::sink::SinkKind;
use crate::size::{parse_duration, parse_size};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub generate: GenerateConfig,
}

impl Config {
    /// Loads from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is
    /// unreadable or malformed.
    pub fn load() -> Result<Self, Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// `<config_dir>/synthlog/synthlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, Error> {
        directories::ProjectDirs::from("", "", "synthlog")
            .map(|dirs| dirs.config_dir().join("synthlog.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Unparseable levels fall back to `warn`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Warn)
    }

    /// Layers the `[generate]` section over `options`.
    ///
    /// Names are resolved permissively here (unknown stays `Unknown`);
    /// rejecting them is `Options::validate`'s job.
    ///
    /// # Errors
    /// `Error::InvalidOption` for sizes or durations that don't parse.
    pub fn apply(&self, mut options: Options) -> Result<Options, Error> {
        let generate = &self.generate;
        if let Some(ref format) = generate.format {
            options.format = Format::from_name(format);
        }
        if let Some(ref kind) = generate.kind {
            options.kind = SinkKind::from_name(kind);
        }
        if let Some(ref output) = generate.output {
            options.output = expand_path(output);
        }
        if let Some(number) = generate.number {
            options.number = number;
        }
        if let Some(ref bytes) = generate.bytes {
            options.bytes = size_value("bytes", bytes)?;
        }
        if let Some(ref split_by) = generate.split_by {
            options.split_by = size_value("split_by", split_by)?;
        }
        if let Some(ref sleep) = generate.sleep {
            options.sleep = duration_value("sleep", sleep)?;
        }
        if let Some(ref delay) = generate.delay {
            options.delay = duration_value("delay", delay)?;
        }
        if let Some(overwrite) = generate.overwrite {
            options.overwrite = overwrite;
        }
        if let Some(forever) = generate.forever {
            options.forever = forever;
        }
        Ok(options)
    }
}

fn size_value(key: &str, raw: &str) -> Result<u64, Error> {
    parse_size(raw).ok_or_else(|| Error::InvalidOption(format!("{key}: invalid size '{raw}'")))
}

fn duration_value(key: &str, raw: &str) -> Result<Duration, Error> {
    parse_duration(raw)
        .ok_or_else(|| Error::InvalidOption(format!("{key}: invalid duration '{raw}'")))
}

/// Expands a leading `~` (and `$VARS`) in user-supplied paths.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    shellexpand::full(path).map_or_else(
        |_| PathBuf::from(shellexpand::tilde(path).as_ref()),
        |expanded| PathBuf::from(expanded.as_ref()),
    )
}
