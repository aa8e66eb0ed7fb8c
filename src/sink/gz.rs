//! Gzip-compressed file sink.

use super::Sink;
use crate::Error;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Streams records through a gzip encoder; the file only becomes a valid
/// archive once `close` writes the trailer.
pub struct GzSink {
    encoder: GzEncoder<BufWriter<File>>,
}

impl GzSink {
    /// Always truncates: a gzip member cannot be appended to in place.
    ///
    /// # Errors
    /// `Error::SinkOpen` with the path and the OS error.
    pub fn create(path: &Path) -> Result<Self, Error> {
        let file = File::create(path).map_err(|source| Error::SinkOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            encoder: GzEncoder::new(BufWriter::new(file), Compression::default()),
        })
    }
}

impl Sink for GzSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.encoder.write_all(line.as_bytes())?;
        self.encoder.write_all(b"\n")
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        let mut writer = self.encoder.finish()?;
        writer.flush()
    }
}
