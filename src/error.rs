//! Unified error type for all synthlog operations.

use std::path::PathBuf;

/// Error type for synthlog operations.
///
/// Unknown formats and unknown output kinds are deliberately absent: they
/// degrade to blank lines and a null sink instead of failing.
#[derive(Debug)]
pub enum Error {
    /// The destination could not be opened or created.
    SinkOpen {
        /// Physical path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// A formatted line could not be written to the sink.
    Write(std::io::Error),
    /// Any other I/O error (config read, sink finalization).
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Options rejected by validation.
    InvalidOption(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinkOpen { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "write error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidOption(s) => write!(f, "invalid option: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SinkOpen { source, .. } => Some(source),
            Self::Write(e) | Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigDirNotFound | Self::InvalidOption(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
