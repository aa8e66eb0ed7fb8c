//! Plain text file sink.

use super::Sink;
use crate::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Unbuffered so a file being tailed sees each record as it is written.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Appends (creating if absent) or truncates. Parent directories are not
    /// created; a missing one is an open error.
    ///
    /// # Errors
    /// `Error::SinkOpen` with the path and the OS error.
    pub fn open(path: &Path, append: bool) -> Result<Self, Error> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(path).map_err(|source| Error::SinkOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // One write per record so concurrent readers never see half a line.
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
        self.file.write_all(&buf)
    }

    fn close(mut self: Box<Self>) -> io::Result<()> {
        self.file.flush()
    }
}
