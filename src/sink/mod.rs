//! Destinations for generated records.
//!
//! A sink accepts whole lines and is closed exactly once. The generation
//! loop only sees the `SinkFactory` trait; `FsSinkFactory` is the real one.

mod file;
mod gz;

pub use file::FileSink;
pub use gz::GzSink;

use crate::Error;
use crate::internal;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Output kind, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SinkKind {
    /// Process standard output. Never closed, never rotated.
    #[default]
    Stdout,
    /// Plain text file, appended to or truncated.
    Log,
    /// Gzip-compressed file, always truncated.
    Gz,
    /// Unrecognized name. Opens a sink that discards everything.
    Unknown,
}

impl SinkKind {
    /// Resolves a name; anything unregistered becomes `SinkKind::Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "stdout" => Self::Stdout,
            "log" => Self::Log,
            "gz" => Self::Gz,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Log => "log",
            Self::Gz => "gz",
            Self::Unknown => "unknown",
        }
    }

    /// The standard stream is shared with the process; it has no file to
    /// finalize and nothing to rotate.
    #[must_use]
    pub const fn is_stream(self) -> bool {
        matches!(self, Self::Stdout)
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte-accepting, closable destination.
pub trait Sink: Send {
    /// Writes `line` followed by a single `\n`.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Flushes and finalizes. Compressed files are only valid afterwards.
    ///
    /// # Errors
    /// I/O errors while flushing or writing the compressed trailer.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// Produces sinks for the generation loop.
pub trait SinkFactory {
    /// # Errors
    /// `Error::SinkOpen` when the destination cannot be opened or created.
    fn open(&self, kind: SinkKind, path: &Path, append: bool) -> Result<Box<dyn Sink>, Error>;
}

/// The real factory: stdout, plain files and gzip files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSinkFactory;

impl SinkFactory for FsSinkFactory {
    fn open(&self, kind: SinkKind, path: &Path, append: bool) -> Result<Box<dyn Sink>, Error> {
        open(kind, path, append)
    }
}

/// Opens a sink of `kind` at `path`.
///
/// `append` only affects `SinkKind::Log`; gzip output always starts fresh.
///
/// # Errors
/// `Error::SinkOpen` when a file-backed kind cannot open its path.
pub fn open(kind: SinkKind, path: &Path, append: bool) -> Result<Box<dyn Sink>, Error> {
    let sink: Box<dyn Sink> = match kind {
        SinkKind::Stdout => Box::new(StdoutSink),
        SinkKind::Log => Box::new(FileSink::open(path, append)?),
        SinkKind::Gz => Box::new(GzSink::create(path)?),
        SinkKind::Unknown => {
            internal::warn(
                "SINK",
                &format!("Unknown output kind, discarding output for {}", path.display()),
            );
            Box::new(NullSink)
        }
    };
    internal::debug(
        "SINK",
        &format!("Opened {kind} sink at {} (append={append})", path.display()),
    );
    Ok(sink)
}

/// Process stdout. Closing only flushes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Accepts and discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}
