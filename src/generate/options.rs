//! Run configuration, immutable once generation starts.

use crate::Error;
use crate::format::{Format, Timestamp};
use crate::sink::SinkKind;
use chrono::Local;
use std::path::PathBuf;
use std::time::Duration;

/// Everything one generation run needs to know.
///
/// Stopping criterion: a non-zero `bytes` target wins over `number`.
/// Rotation: `split_by` counts records in count mode and bytes in byte mode;
/// zero disables it.
#[derive(Debug, Clone)]
pub struct Options {
    pub format: Format,
    pub kind: SinkKind,
    /// Destination path; also the base every rotated name derives from.
    pub output: PathBuf,
    /// Truncate instead of appending. Gzip output always truncates.
    pub overwrite: bool,
    pub number: u64,
    pub bytes: u64,
    pub split_by: u64,
    /// Wall-clock pause before each record; also the default content-time step.
    pub delay: Duration,
    /// Content-time step between records; overrides `delay` for that purpose.
    pub sleep: Duration,
    pub forever: bool,
    /// First timestamp for logical-time modes (byte budget and forever).
    pub start_time: Timestamp,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::ApacheCommon,
            kind: SinkKind::Stdout,
            output: PathBuf::from("generated.log"),
            overwrite: false,
            number: 1000,
            bytes: 0,
            split_by: 0,
            delay: Duration::ZERO,
            sleep: Duration::ZERO,
            forever: false,
            start_time: Local::now().fixed_offset(),
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn kind(mut self, kind: SinkKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub const fn number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }

    #[must_use]
    pub const fn bytes(mut self, bytes: u64) -> Self {
        self.bytes = bytes;
        self
    }

    #[must_use]
    pub const fn split_by(mut self, split_by: u64) -> Self {
        self.split_by = split_by;
        self
    }

    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn sleep(mut self, sleep: Duration) -> Self {
        self.sleep = sleep;
        self
    }

    #[must_use]
    pub const fn forever(mut self, forever: bool) -> Self {
        self.forever = forever;
        self
    }

    #[must_use]
    pub const fn start_time(mut self, start_time: Timestamp) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sinks are opened in append mode unless overwriting.
    #[must_use]
    pub const fn append(&self) -> bool {
        !self.overwrite
    }

    /// Byte budget set: generation is measured in bytes, not records.
    #[must_use]
    pub const fn byte_mode(&self) -> bool {
        self.bytes > 0
    }

    /// Strict checks for user-facing entry points.
    ///
    /// The generation loop itself never calls this: an unknown format still
    /// renders blank lines and an unknown kind still writes to a null sink.
    ///
    /// # Errors
    /// `Error::InvalidOption` naming the first offending setting.
    pub fn validate(&self) -> Result<(), Error> {
        if self.kind == SinkKind::Unknown {
            return Err(Error::InvalidOption(
                "type must be one of 'stdout', 'log' or 'gz'".to_string(),
            ));
        }
        if self.format == Format::Unknown {
            let names: Vec<&str> = Format::names().collect();
            return Err(Error::InvalidOption(format!(
                "format must be one of {}",
                names.join(", ")
            )));
        }
        if !self.forever && self.number == 0 && self.bytes == 0 {
            return Err(Error::InvalidOption(
                "one of number or bytes must be greater than zero".to_string(),
            ));
        }
        if self.kind != SinkKind::Stdout && self.output.as_os_str().is_empty() {
            return Err(Error::InvalidOption("output path is empty".to_string()));
        }
        Ok(())
    }
}
